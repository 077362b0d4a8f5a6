//! Wordle guess evaluation
//!
//! Each guessed letter is scored against the target as one of three states:
//! - Absent (letter not in the word, or all its occurrences already credited)
//! - Present (letter in the word, wrong position)
//! - Correct (letter in the correct position)

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Match state of a single guessed letter
///
/// Ordered so that a higher state never loses to a lower one when aggregating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Emoji tile used in shared results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// Evaluated states for one guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All letters correct
    pub const WIN: Self = Self([LetterState::Correct; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(states: [LetterState; WORD_LENGTH]) -> Self {
        Self(states)
    }

    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }

    /// Count the letters in a given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use puzzle_grove::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut states = [LetterState::Absent; WORD_LENGTH];
        let mut len = 0;

        for ch in s.chars() {
            let state = match ch {
                'G' | 'g' | '🟩' => LetterState::Correct,
                'Y' | 'y' | '🟨' => LetterState::Present,
                '-' | '_' | '⬜' => LetterState::Absent,
                _ => return None,
            };
            *states.get_mut(len)? = state;
            len += 1;
        }

        (len == WORD_LENGTH).then_some(Self(states))
    }

    /// Convert to an emoji string such as "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl std::ops::Index<usize> for Feedback {
    type Output = LetterState;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Score `guess` against `target`
///
/// Duplicate letters are credited at most as many times as they occur in the
/// target, and exact-position matches are never stolen by an earlier
/// present-marking of the same letter.
///
/// # Algorithm
/// 1. Count every letter of the target
/// 2. First pass: mark exact matches correct and remove them from the pool
/// 3. Second pass: mark remaining letters present while the pool has them
///
/// # Examples
/// ```
/// use puzzle_grove::core::{evaluate, LetterState::*, Word};
///
/// let target = Word::new("crane").unwrap();
/// let guess = Word::new("react").unwrap();
/// let feedback = evaluate(&target, &guess);
///
/// assert_eq!(feedback.states(), &[Present, Present, Correct, Present, Absent]);
/// ```
#[must_use]
pub fn evaluate(target: &Word, guess: &Word) -> Feedback {
    let mut result = [LetterState::Absent; WORD_LENGTH];
    let mut remaining = target.char_counts();

    for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
        if g == t {
            result[i] = LetterState::Correct;
            if let Some(count) = remaining.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (i, &g) in guess.chars().iter().enumerate() {
        if result[i] == LetterState::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            result[i] = LetterState::Present;
            *count -= 1;
        }
    }

    Feedback(result)
}
