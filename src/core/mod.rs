//! Core Wordle domain types
//!
//! Pure evaluation logic with no I/O: words, per-letter feedback, hard-mode
//! constraints and keyboard aggregation.

mod feedback;
mod hard_mode;
mod keyboard;
mod word;

pub use feedback::{Feedback, LetterState, evaluate};
pub use hard_mode::{HardModeViolation, validate_hard_mode};
pub use keyboard::KeyboardState;
pub use word::{WORD_LENGTH, Word, WordError};
