//! Keyboard-wide letter state aggregation

use super::feedback::{Feedback, LetterState};
use super::word::Word;

/// Best-known state of every letter A-Z across all evaluated rows
///
/// States only ever upgrade (`Absent -> Present -> Correct`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: [Option<LetterState>; 26],
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one evaluated letter, keeping the stronger of old and new
    ///
    /// Non-letters are ignored.
    pub fn record(&mut self, letter: u8, state: LetterState) {
        let Some(slot) = Self::index(letter).map(|i| &mut self.letters[i]) else {
            return;
        };
        if slot.is_none_or(|current| state > current) {
            *slot = Some(state);
        }
    }

    /// Record every letter of an evaluated row
    pub fn record_row(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &state) in guess.chars().iter().zip(feedback.states()) {
            self.record(letter, state);
        }
    }

    /// State of a letter, or `None` if it has never been guessed
    #[must_use]
    pub fn state(&self, letter: u8) -> Option<LetterState> {
        Self::index(letter).and_then(|i| self.letters[i])
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_alphabetic()
            .then(|| usize::from(letter.to_ascii_uppercase() - b'A'))
    }
}
