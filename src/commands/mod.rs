//! Command implementations

pub mod benchmark;
pub mod evaluate;
pub mod play;
pub mod search;

pub use benchmark::{BenchmarkResult, ThemeBenchmark, run_benchmark};
pub use evaluate::{EvaluationResult, evaluate_pair};
pub use play::{PlayOptions, run_play};
pub use search::{SearchError, new_search, run_search_game, select_theme};
