//! Hard-mode guess constraints
//!
//! In hard mode every revealed hint from the immediately preceding row must be
//! honoured by the next guess: correct letters stay in place and present
//! letters must appear somewhere. Older rows are not consulted.

use super::feedback::{Feedback, LetterState};
use super::word::Word;
use std::fmt;

/// The first constraint a guess failed to honour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HardModeViolation {
    /// Uppercase ASCII letter that was required
    pub letter: u8,
    /// Zero-based position the letter was required at, or `None` for a present letter
    pub required_position: Option<usize>,
}

impl fmt::Display for HardModeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = char::from(self.letter);
        match self.required_position {
            Some(position) => write!(f, "{letter} must be in position {}", position + 1),
            None => write!(f, "Guess must contain {letter}"),
        }
    }
}

impl std::error::Error for HardModeViolation {}

/// Check `guess` against the revealed states of the previous row
///
/// Positions are checked left to right; at each position a correct constraint
/// is checked before a present one, and the first failure is reported.
///
/// # Errors
/// Returns the violated constraint if the guess drops a revealed hint.
///
/// # Examples
/// ```
/// use puzzle_grove::core::{evaluate, validate_hard_mode, Word};
///
/// let target = Word::new("crane").unwrap();
/// let prior = Word::new("trace").unwrap();
/// let feedback = evaluate(&target, &prior);
///
/// assert!(validate_hard_mode(&Word::new("brace").unwrap(), &prior, &feedback).is_ok());
/// assert!(validate_hard_mode(&Word::new("about").unwrap(), &prior, &feedback).is_err());
/// ```
pub fn validate_hard_mode(
    guess: &Word,
    prior_guess: &Word,
    prior_feedback: &Feedback,
) -> Result<(), HardModeViolation> {
    for (i, (&letter, &state)) in prior_guess
        .chars()
        .iter()
        .zip(prior_feedback.states())
        .enumerate()
    {
        match state {
            LetterState::Correct if guess.char_at(i) != letter => {
                return Err(HardModeViolation {
                    letter,
                    required_position: Some(i),
                });
            }
            LetterState::Present if !guess.contains(letter) => {
                return Err(HardModeViolation {
                    letter,
                    required_position: None,
                });
            }
            _ => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluate;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn check(target: &str, prior: &str, guess: &str) -> Result<(), HardModeViolation> {
        let prior = word(prior);
        let feedback = evaluate(&word(target), &prior);
        validate_hard_mode(&word(guess), &prior, &feedback)
    }

    #[test]
    fn honouring_all_hints_is_valid() {
        // TRACE vs CRANE: T(absent) R(correct) A(correct) C(present) E(correct)
        assert_eq!(check("crane", "trace", "crane"), Ok(()));
        assert_eq!(check("crane", "trace", "brace"), Ok(()));
    }

    #[test]
    fn missing_correct_letter_reports_position() {
        let violation = check("crane", "trace", "crone").unwrap_err();
        assert_eq!(violation.letter, b'A');
        assert_eq!(violation.required_position, Some(2));
        assert_eq!(violation.to_string(), "A must be in position 3");
    }

    #[test]
    fn missing_present_letter_reports_letter() {
        // SLATE vs LEAST: S(present) L(present) A(correct) T(present) E(present)
        let violation = check("least", "slate", "klaxe").unwrap_err();
        assert_eq!(violation.letter, b'S');
        assert_eq!(violation.required_position, None);
        assert_eq!(violation.to_string(), "Guess must contain S");
    }

    #[test]
    fn present_letter_may_move_anywhere() {
        // REACT vs CRANE: R(present) E(present) A(correct) C(present) T(absent)
        assert_eq!(check("crane", "react", "brace"), Ok(()));
        assert_eq!(
            check("crane", "react", "cramp"),
            Err(HardModeViolation {
                letter: b'E',
                required_position: None,
            })
        );
    }

    #[test]
    fn correct_letter_may_not_move() {
        // CREAK keeps every letter but moves the green A
        assert_eq!(
            check("crane", "react", "creak"),
            Err(HardModeViolation {
                letter: b'A',
                required_position: Some(2),
            })
        );
    }

    #[test]
    fn absent_letters_may_be_reused() {
        // T was absent in TRACE; repeating the whole row is still allowed
        assert_eq!(check("crane", "trace", "trace"), Ok(()));
    }

    #[test]
    fn first_violation_wins() {
        let violation = check("crane", "trace", "ghost").unwrap_err();
        assert_eq!(violation.letter, b'R');
        assert_eq!(violation.required_position, Some(1));
    }
}
