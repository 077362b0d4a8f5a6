//! Cumulative game statistics

use super::wordle::DEFAULT_MAX_ROWS;
use std::time::Duration;

/// Played/won counters, streaks and the guess distribution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordleStats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins by number of rows used; index 0 is a first-row win
    pub distribution: [u32; DEFAULT_MAX_ROWS],
    pub failures: u32,
}

impl WordleStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a win that took `rows` guesses
    ///
    /// Row counts outside `1..=6` still count as a win but are not bucketed.
    pub fn record_win(&mut self, rows: usize) {
        self.games_played += 1;
        self.games_won += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
        if let Some(bucket) = rows.checked_sub(1).and_then(|i| self.distribution.get_mut(i)) {
            *bucket += 1;
        }
    }

    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
        self.failures += 1;
    }

    /// Percentage of games won, rounded; 0 before any game
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) * 100.0 / f64::from(self.games_played)).round() as u32
    }
}

/// Totals over completed word-search games
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSearchStats {
    pub games_played: u32,
    pub total_words_found: u32,
    pub total_hints_used: u32,
    pub total_completion_time: Duration,
}

impl WordSearchStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished grid of `words` words
    ///
    /// Only whole seconds count towards the total time.
    pub fn record_completion(&mut self, words: usize, hints_used: u32, elapsed: Duration) {
        self.games_played += 1;
        self.total_words_found += u32::try_from(words).unwrap_or(u32::MAX);
        self.total_hints_used += hints_used;
        self.total_completion_time += Duration::from_secs(elapsed.as_secs());
    }

    /// Mean completion time in minutes, to one decimal place
    #[must_use]
    pub fn average_minutes(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        let minutes =
            self.total_completion_time.as_secs_f64() / f64::from(self.games_played) / 60.0;
        (minutes * 10.0).round() / 10.0
    }
}

/// `m:ss`, as shown on the completion screen
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
