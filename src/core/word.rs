//! Five-letter Wordle words
//!
//! Targets and guesses share one normalised form: five uppercase ASCII
//! letters, kept both as text and as a byte array for positional checks.

use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Letters per Wordle row
pub const WORD_LENGTH: usize = 5;

/// A normalised five-letter word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LENGTH],
}

/// Why a string is not a valid `Word`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// Byte length of the rejected input
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "expected {WORD_LENGTH} letters, found {len}")
            }
            Self::NonAscii => f.write_str("only A-Z letters are allowed"),
            Self::InvalidCharacters => f.write_str("word may only contain letters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Normalise `text` to uppercase and validate it
    ///
    /// # Errors
    /// `NonAscii` for any non-ASCII input, `InvalidLength` unless exactly five
    /// bytes remain, `InvalidCharacters` for digits, spaces or punctuation.
    ///
    /// # Examples
    /// ```
    /// use puzzle_grove::core::Word;
    ///
    /// assert_eq!(Word::new("crane").unwrap().text(), "CRANE");
    /// assert!(Word::new("cranes").is_err());
    /// assert!(Word::new("cr4ne").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        text.make_ascii_uppercase();

        let letters: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;
        if letters.iter().any(|b| !b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, letters })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Letters as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.letters
    }

    /// Letter at `position`; panics past the last letter
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Occurrences of each letter
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        self.letters
            .iter()
            .fold(FxHashMap::default(), |mut counts, &letter| {
                *counts.entry(letter).or_default() += 1;
                counts
            })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
