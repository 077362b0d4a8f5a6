//! Evaluate command
//!
//! Scores a single guess against a target without a game around it.

use crate::core::{Feedback, Word, WordError, evaluate};

/// Result of scoring one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    pub target: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Parse both words and evaluate `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn evaluate_pair(target: &str, guess: &str) -> Result<EvaluationResult, WordError> {
    let target = Word::new(target.trim())?;
    let guess = Word::new(guess.trim())?;
    let feedback = evaluate(&target, &guess);
    Ok(EvaluationResult {
        target,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_pair() {
        let result = evaluate_pair("llama", " allow ").unwrap();
        assert_eq!(result.guess.text(), "ALLOW");
        assert_eq!(result.feedback.to_emoji(), "🟨🟩🟨⬜⬜");
    }

    #[test]
    fn rejects_bad_words() {
        assert!(evaluate_pair("crane", "cranes").is_err());
        assert!(evaluate_pair("cr4ne", "crane").is_err());
    }
}
