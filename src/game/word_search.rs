//! Word-search game session
//!
//! Players trace words by activating cells one at a time. Each new cell must
//! touch the previous one (including diagonally); activating the last cell
//! again takes it back. Once the traced letters spell a word of three or more
//! letters, that word is marked found, unless a longer unfound word still
//! continues the selection (CAT inside CATFISH).

use super::share::word_search_share_text;
use crate::grid::{Coord, Grid, WordGrid};
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Shortest selection that is checked against the word list
pub const MIN_WORD_LENGTH: usize = 3;

/// Hint-counter cost of revealing a whole word
const REVEAL_COST: u32 = 3;

/// Result of activating a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Outside the grid, not adjacent, or already in the selection
    Ignored,
    Selected,
    Deselected,
    Found(String),
    AlreadyFound(String),
    /// The last outstanding word was found
    Completed(String),
}

/// What a presenter needs to draw one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    pub letter: char,
    pub found: bool,
    pub selected: bool,
}

/// A single word-search game over a generated grid
pub struct WordSearchSession {
    theme: String,
    puzzle: WordGrid,
    words: Vec<String>,
    found: Vec<bool>,
    found_cells: FxHashSet<Coord>,
    selection: Vec<Coord>,
    hints_used: u32,
    date: NaiveDate,
    started: Instant,
    completed_in: Option<Duration>,
}

impl WordSearchSession {
    /// Start a game dated today; only the words that made it into the grid are
    /// playable, in theme order
    #[must_use]
    pub fn new(theme: impl Into<String>, puzzle: WordGrid) -> Self {
        let words: Vec<String> = puzzle.placed_words().map(str::to_string).collect();
        if !puzzle.is_complete() {
            tracing::warn!(unplaced = ?puzzle.unplaced(), "playing without unplaced words");
        }
        Self {
            theme: theme.into(),
            found: vec![false; words.len()],
            words,
            puzzle,
            found_cells: FxHashSet::default(),
            selection: Vec::new(),
            hints_used: 0,
            date: chrono::Local::now().date_naive(),
            started: Instant::now(),
            completed_in: None,
        }
    }

    /// Date printed in the share text
    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn on_cell_activated(&mut self, coord: Coord) -> SelectOutcome {
        if self.grid().get(coord).is_none() {
            return SelectOutcome::Ignored;
        }

        if self.selection.last() == Some(&coord) {
            self.selection.pop();
            return SelectOutcome::Deselected;
        }

        if self.selection.contains(&coord) {
            return SelectOutcome::Ignored;
        }

        if let Some(&last) = self.selection.last()
            && !last.is_adjacent(coord)
        {
            return SelectOutcome::Ignored;
        }

        self.selection.push(coord);
        if self.selection.len() < MIN_WORD_LENGTH {
            return SelectOutcome::Selected;
        }

        let traced = self.grid().read(&self.selection);
        if self.continues_unfound(&traced) {
            return SelectOutcome::Selected;
        }
        let Some(index) = self.words.iter().position(|w| *w == traced) else {
            return SelectOutcome::Selected;
        };

        let path = std::mem::take(&mut self.selection);
        if self.found[index] {
            return SelectOutcome::AlreadyFound(traced);
        }

        self.mark_found(index, &path);
        if self.is_complete() {
            SelectOutcome::Completed(traced)
        } else {
            SelectOutcome::Found(traced)
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Point at one random cell of a random unfound word
    ///
    /// Returns `None`, without counting a hint, when every word is found.
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Coord> {
        let index = self.random_unfound(rng)?;
        let path = self.puzzle.locate(&self.words[index]);
        let cell = path.choose(rng).copied()?;
        self.hints_used += 1;
        tracing::debug!(word = %self.words[index], %cell, hints = self.hints_used, "hint");
        Some(cell)
    }

    /// Mark a random unfound word as found, at three times the cost of a hint
    pub fn reveal<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(String, Vec<Coord>)> {
        let index = self.random_unfound(rng)?;
        let path = self.puzzle.locate(&self.words[index]);
        self.hints_used += REVEAL_COST;
        self.mark_found(index, &path);
        Some((self.words[index].clone(), path))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.iter().all(|&f| f)
    }

    pub fn found_words(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .zip(&self.found)
            .filter(|&(_, &found)| found)
            .map(|(w, _)| w.as_str())
    }

    /// Playable words, in theme order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn is_found(&self, word: &str) -> bool {
        self.words
            .iter()
            .position(|w| w.eq_ignore_ascii_case(word))
            .is_some_and(|i| self.found[i])
    }

    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        self.puzzle.grid()
    }

    #[must_use]
    pub const fn puzzle(&self) -> &WordGrid {
        &self.puzzle
    }

    #[must_use]
    pub fn selection(&self) -> &[Coord] {
        &self.selection
    }

    /// Display state of a cell, or `None` outside the grid
    #[must_use]
    pub fn cell_state(&self, coord: Coord) -> Option<CellView> {
        self.grid().get(coord).map(|letter| CellView {
            letter: char::from(letter),
            found: self.found_cells.contains(&coord),
            selected: self.selection.contains(&coord),
        })
    }

    /// Time from the start of the game to the last word, once complete
    #[must_use]
    pub const fn completion_time(&self) -> Option<Duration> {
        self.completed_in
    }

    /// Time since the start, frozen once the game is complete
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.completed_in.unwrap_or_else(|| self.started.elapsed())
    }

    #[must_use]
    pub fn share_text(&self) -> String {
        word_search_share_text(&self.theme, self.date, &self.found, self.hints_used)
    }

    fn mark_found(&mut self, index: usize, path: &[Coord]) {
        self.found[index] = true;
        self.found_cells.extend(path.iter().copied());
        tracing::info!(
            word = %self.words[index],
            found = self.found_words().count(),
            total = self.words.len(),
            "word found"
        );
        if self.is_complete() && self.completed_in.is_none() {
            let elapsed = self.started.elapsed();
            tracing::info!(theme = %self.theme, ?elapsed, hints = self.hints_used, "grid complete");
            self.completed_in = Some(elapsed);
        }
    }

    fn continues_unfound(&self, traced: &str) -> bool {
        self.words
            .iter()
            .zip(&self.found)
            .any(|(w, &found)| !found && w.len() > traced.len() && w.starts_with(traced))
    }

    fn random_unfound<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let unfound: Vec<usize> = (0..self.words.len()).filter(|&i| !self.found[i]).collect();
        unfound.choose(rng).copied()
    }
}
