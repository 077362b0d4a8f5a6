//! Wordle game session
//!
//! One `WordleSession` per puzzle: it owns the row history, the row being typed,
//! and the keyboard aggregate. Input arrives as letter/backspace/submit events.

use crate::core::{
    Feedback, HardModeViolation, KeyboardState, WORD_LENGTH, Word, evaluate, validate_hard_mode,
};
use rustc_hash::FxHashSet;
use std::fmt;

/// Rows allowed per game when none is configured
pub const DEFAULT_MAX_ROWS: usize = 6;

/// Configuration for a Wordle game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordleConfig {
    pub max_rows: usize,
    pub hard_mode: bool,
}

impl WordleConfig {
    #[must_use]
    pub const fn new(hard_mode: bool) -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            hard_mode,
        }
    }
}

impl Default for WordleConfig {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Set of accepted guesses
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<Word>,
}

impl Dictionary {
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        Self {
            words: words.iter().cloned().collect(),
        }
    }

    pub fn insert(&mut self, word: Word) {
        self.words.insert(word);
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// An evaluated guess; immutable once recorded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRow {
    pub word: Word,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Win,
    Continue,
    Lose,
}

/// Why a submission was rejected; the typed row is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    NotEnoughLetters,
    NotInWordList,
    HardMode(HardModeViolation),
    GameOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughLetters => write!(f, "Not enough letters"),
            Self::NotInWordList => write!(f, "Not in word list"),
            Self::HardMode(violation) => write!(f, "{violation}"),
            Self::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// A single Wordle game
pub struct WordleSession<'a> {
    target: Word,
    dictionary: &'a Dictionary,
    config: WordleConfig,
    rows: Vec<GuessRow>,
    input: String,
    keyboard: KeyboardState,
    status: GameStatus,
}

impl<'a> WordleSession<'a> {
    /// Start a game; the target is accepted as a guess even if the dictionary lacks it
    #[must_use]
    pub fn new(target: Word, dictionary: &'a Dictionary, config: WordleConfig) -> Self {
        Self {
            target,
            dictionary,
            config,
            rows: Vec::with_capacity(config.max_rows),
            input: String::with_capacity(WORD_LENGTH),
            keyboard: KeyboardState::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Append a letter to the current row
    ///
    /// Ignored when the row is full, the character is not an ASCII letter, or
    /// the game is over.
    pub fn push_letter(&mut self, letter: char) {
        if self.status.is_over() || self.input.len() >= WORD_LENGTH || !letter.is_ascii_alphabetic()
        {
            return;
        }
        self.input.push(letter.to_ascii_uppercase());
    }

    /// Remove the last typed letter
    pub fn pop_letter(&mut self) {
        if !self.status.is_over() {
            self.input.pop();
        }
    }

    /// Replace the current row with `guess` and submit it
    ///
    /// # Errors
    /// See [`Self::submit`].
    pub fn on_submit(&mut self, guess: &str) -> Result<SubmitOutcome, SubmitError> {
        if self.status.is_over() {
            return Err(SubmitError::GameOver);
        }
        self.input.clear();
        for letter in guess.trim().chars() {
            if self.input.len() == WORD_LENGTH {
                break;
            }
            self.push_letter(letter);
        }
        if guess.trim().chars().count() > WORD_LENGTH {
            return Err(SubmitError::NotInWordList);
        }
        self.submit()
    }

    /// Submit the current row
    ///
    /// # Errors
    /// - `NotEnoughLetters` if fewer than five letters are typed
    /// - `NotInWordList` if the word is neither in the dictionary nor the target
    /// - `HardMode` if hard mode is on and the previous row's hints are dropped
    /// - `GameOver` once the game has been won or lost
    pub fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        if self.status.is_over() {
            return Err(SubmitError::GameOver);
        }

        let guess = Word::new(self.input.as_str()).map_err(|_| SubmitError::NotEnoughLetters)?;

        if guess != self.target && !self.dictionary.contains(&guess) {
            return Err(SubmitError::NotInWordList);
        }

        if self.config.hard_mode
            && let Some(prior) = self.rows.last()
        {
            validate_hard_mode(&guess, &prior.word, &prior.feedback)
                .map_err(SubmitError::HardMode)?;
        }

        let feedback = evaluate(&self.target, &guess);
        self.keyboard.record_row(&guess, &feedback);
        tracing::debug!(guess = %guess, feedback = %feedback.to_emoji(), row = self.rows.len() + 1, "evaluated guess");
        self.rows.push(GuessRow {
            word: guess,
            feedback,
        });
        self.input.clear();

        let outcome = if feedback.is_win() {
            self.status = GameStatus::Won;
            SubmitOutcome::Win
        } else if self.rows.len() >= self.config.max_rows {
            self.status = GameStatus::Lost;
            SubmitOutcome::Lose
        } else {
            SubmitOutcome::Continue
        };

        if self.status.is_over() {
            tracing::info!(target_word = %self.target, rows = self.rows.len(), status = ?self.status, "game over");
        }

        Ok(outcome)
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.input
    }

    #[must_use]
    pub fn rows(&self) -> &[GuessRow] {
        &self.rows
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn config(&self) -> WordleConfig {
        self.config
    }

    /// Number of rows submitted so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterState;
    use crate::wordlists::ANSWERS;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Dictionary {
        Dictionary::new(&words_from_slice(ANSWERS))
    }

    fn session<'a>(target: &str, dictionary: &'a Dictionary, hard_mode: bool) -> WordleSession<'a> {
        WordleSession::new(
            Word::new(target).unwrap(),
            dictionary,
            WordleConfig::new(hard_mode),
        )
    }

    #[test]
    fn typing_and_backspace() {
        let dict = dictionary();
        let mut game = session("crane", &dict, false);

        for c in "slat3es".chars() {
            game.push_letter(c);
        }
        assert_eq!(game.current_input(), "SLATE");

        game.pop_letter();
        assert_eq!(game.current_input(), "SLAT");
        assert_eq!(game.submit(), Err(SubmitError::NotEnoughLetters));
        assert_eq!(game.current_input(), "SLAT");
    }

    #[test]
    fn unknown_word_is_rejected() {
        let dict = dictionary();
        let mut game = session("crane", &dict, false);
        assert_eq!(game.on_submit("xyzzy"), Err(SubmitError::NotInWordList));
        assert!(game.rows().is_empty());
        assert_eq!(game.current_input(), "XYZZY");
    }

    #[test]
    fn overlong_guess_is_rejected() {
        let dict = dictionary();
        let mut game = session("crane", &dict, false);
        assert_eq!(game.on_submit("cranes"), Err(SubmitError::NotInWordList));
        assert!(game.rows().is_empty());
    }

    #[test]
    fn winning_guess_ends_game() {
        let dict = dictionary();
        let mut game = session("crane", &dict, false);

        assert_eq!(game.on_submit("slate"), Ok(SubmitOutcome::Continue));
        assert_eq!(game.on_submit("crane"), Ok(SubmitOutcome::Win));
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.attempts(), 2);
        assert_eq!(game.on_submit("crane"), Err(SubmitError::GameOver));
    }

    #[test]
    fn six_misses_lose() {
        let dict = dictionary();
        let mut game = session("crane", &dict, false);

        for (i, guess) in ["about", "above", "actor", "adopt", "agent"].iter().enumerate() {
            assert_eq!(game.on_submit(guess), Ok(SubmitOutcome::Continue), "row {i}");
        }
        assert_eq!(game.on_submit("alarm"), Ok(SubmitOutcome::Lose));
        assert_eq!(game.status(), GameStatus::Lost);

        game.push_letter('a');
        assert_eq!(game.current_input(), "");
    }

    #[test]
    fn target_accepted_even_if_not_in_dictionary() {
        let dict = Dictionary::default();
        let mut game = session("zesty", &dict, false);
        assert_eq!(game.on_submit("zesty"), Ok(SubmitOutcome::Win));
    }

    #[test]
    fn hard_mode_enforces_previous_hints() {
        let dict = dictionary();
        let mut game = session("crane", &dict, true);

        // TRACE: R, A, E correct; C present
        assert_eq!(game.on_submit("trace"), Ok(SubmitOutcome::Continue));

        let err = game.on_submit("about").unwrap_err();
        assert_eq!(
            err,
            SubmitError::HardMode(HardModeViolation {
                letter: b'R',
                required_position: Some(1),
            })
        );
        assert_eq!(err.to_string(), "R must be in position 2");
        assert_eq!(game.attempts(), 1);

        // GRACE keeps R, A, E in place and still contains C
        assert_eq!(game.on_submit("grace"), Ok(SubmitOutcome::Continue));
        assert_eq!(game.on_submit("crane"), Ok(SubmitOutcome::Win));
    }

    #[test]
    fn hard_mode_off_allows_anything_in_dictionary() {
        let dict = dictionary();
        let mut game = session("crane", &dict, false);
        assert_eq!(game.on_submit("trace"), Ok(SubmitOutcome::Continue));
        assert_eq!(game.on_submit("about"), Ok(SubmitOutcome::Continue));
    }

    #[test]
    fn keyboard_aggregates_across_rows() {
        let dict = dictionary();
        let mut game = session("crane", &dict, false);
        game.on_submit("react").unwrap();
        assert_eq!(game.keyboard().state(b'C'), Some(LetterState::Present));
        game.on_submit("crash").unwrap();
        assert_eq!(game.keyboard().state(b'C'), Some(LetterState::Correct));
        game.on_submit("clock").unwrap();
        assert_eq!(game.keyboard().state(b'C'), Some(LetterState::Correct));
        assert_eq!(game.keyboard().state(b'T'), Some(LetterState::Absent));
    }
}
