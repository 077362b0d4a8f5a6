//! Game sessions built on the puzzle engines
//!
//! Sessions own all mutable game state and never render anything themselves;
//! a [`Presenter`] is handed the session whenever it should be drawn.

mod rotation;
mod share;
mod stats;
mod word_search;
mod wordle;

pub use rotation::Rotation;
pub use share::{share_text, word_search_share_text};
pub use stats::{WordSearchStats, WordleStats, format_elapsed};
pub use word_search::{CellView, MIN_WORD_LENGTH, SelectOutcome, WordSearchSession};
pub use wordle::{
    DEFAULT_MAX_ROWS, Dictionary, GameStatus, GuessRow, SubmitError, SubmitOutcome, WordleConfig,
    WordleSession,
};

/// Output side of a game front end
pub trait Presenter {
    fn render_wordle(&mut self, session: &WordleSession<'_>);
    fn render_word_search(&mut self, session: &WordSearchSession);
    /// Transient status line, e.g. "Not in word list"
    fn message(&mut self, text: &str);
}
