//! Puzzle Grove
//!
//! Engines for two word puzzles: a Wordle-style guess evaluator with hard-mode
//! validation, and a word-search grid generator with a straight-line word
//! locator. Game sessions, statistics and share text sit on top.
//!
//! # Quick Start
//!
//! ```rust
//! use puzzle_grove::core::{evaluate, LetterState, Word};
//! use puzzle_grove::grid::build;
//!
//! let target = Word::new("crane").unwrap();
//! let guess = Word::new("trace").unwrap();
//! let feedback = evaluate(&target, &guess);
//! assert_eq!(feedback[1], LetterState::Correct);
//!
//! let puzzle = build(&["OAK", "PINE", "MAPLE"], 9, &mut rand::rng());
//! for word in puzzle.placed_words() {
//!     assert_eq!(puzzle.locate(word).len(), word.len());
//! }
//! ```

// Core domain types
pub mod core;

// Word-search grids
pub mod grid;

// Game sessions, stats and share text
pub mod game;

// Date-seeded randomness
pub mod rng;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
