//! Terminal output formatting
//!
//! The colored CLI presenter plus printers for one-shot command results.

pub mod display;
pub mod formatters;

pub use display::{
    CliPresenter, print_benchmark_result, print_evaluation, print_placements, print_stats,
    print_unplaced, print_word_search_stats,
};
