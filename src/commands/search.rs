//! Word-search commands
//!
//! Builds a themed grid and optionally plays it from line input. Cells are
//! entered as `x y` (or `x,y`), zero-based from the top-left corner.

use crate::game::{Presenter, SelectOutcome, WordSearchSession, WordSearchStats, format_elapsed};
use crate::grid::{Coord, GridBuilder, GridConfig};
use crate::wordlists::{THEMES, Theme, theme_by_id};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::io::{self, BufRead};

/// Error selecting a theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    UnknownTheme(u32),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTheme(id) => {
                write!(f, "Unknown theme {id} (expected 1-{})", THEMES.len())
            }
        }
    }
}

impl std::error::Error for SearchError {}

/// Resolve `theme_id`, or pick a random theme when none is given
///
/// # Errors
///
/// Returns `UnknownTheme` if `theme_id` is not in the catalog.
pub fn select_theme<R: Rng + ?Sized>(
    theme_id: Option<u32>,
    rng: &mut R,
) -> Result<&'static Theme, SearchError> {
    match theme_id {
        Some(id) => theme_by_id(id).ok_or(SearchError::UnknownTheme(id)),
        // THEMES is never empty
        None => THEMES.choose(rng).ok_or(SearchError::UnknownTheme(0)),
    }
}

/// Build a grid for `theme` and wrap it in a fresh session
pub fn new_search<R: Rng + ?Sized>(
    theme: &Theme,
    config: GridConfig,
    rng: &mut R,
) -> WordSearchSession {
    let puzzle = GridBuilder::new(config).build(theme.words, rng);
    tracing::info!(
        theme = theme.name,
        placed = puzzle.placements().len(),
        unplaced = puzzle.unplaced().len(),
        size = config.size,
        "built grid"
    );
    WordSearchSession::new(theme.name, puzzle)
}

/// One player command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Cell(Coord),
    Hint,
    Reveal,
    Clear,
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    match line.trim().to_lowercase().as_str() {
        "hint" | "h" => Some(Command::Hint),
        "reveal" | "r" => Some(Command::Reveal),
        "clear" | "c" => Some(Command::Clear),
        "quit" | "q" | "exit" => Some(Command::Quit),
        other => {
            let mut parts = other
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|p| !p.is_empty());
            let x = parts.next()?.parse().ok()?;
            let y = parts.next()?.parse().ok()?;
            parts.next().is_none().then_some(Command::Cell(Coord::new(x, y)))
        }
    }
}

/// Play `session` until every word is found, the player quits, or input ends
///
/// Returns `true` if the puzzle was completed, in which case it is also
/// recorded in `stats`.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn run_search_game<B, P, R>(
    session: &mut WordSearchSession,
    input: &mut B,
    presenter: &mut P,
    stats: &mut WordSearchStats,
    rng: &mut R,
) -> io::Result<bool>
where
    B: BufRead,
    P: Presenter,
    R: Rng + ?Sized,
{
    presenter.render_word_search(session);

    while !session.is_complete() {
        presenter.message("Cell 'x y', 'hint', 'reveal', 'clear' or 'quit'");
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(false);
        }

        let Some(command) = parse_command(&line) else {
            presenter.message("Unrecognised command");
            continue;
        };

        match command {
            Command::Quit => return Ok(false),
            Command::Clear => session.clear_selection(),
            Command::Hint => match session.hint(rng) {
                Some(cell) => presenter.message(&format!("Try the cell at {cell}")),
                None => presenter.message("Nothing left to find"),
            },
            Command::Reveal => {
                if let Some((word, _)) = session.reveal(rng) {
                    presenter.message(&format!("Revealed {word}"));
                }
            }
            Command::Cell(coord) => match session.on_cell_activated(coord) {
                SelectOutcome::Ignored => presenter.message("Cannot select that cell"),
                SelectOutcome::Found(word) | SelectOutcome::Completed(word) => {
                    presenter.message(&format!("Found {word}!"));
                }
                SelectOutcome::AlreadyFound(word) => {
                    presenter.message(&format!("{word} is already found"));
                }
                SelectOutcome::Selected | SelectOutcome::Deselected => {}
            },
        }
        presenter.render_word_search(session);
    }

    let elapsed = session.elapsed();
    stats.record_completion(session.words().len(), session.hints_used(), elapsed);
    presenter.message(&format!(
        "All {} words found in {}",
        session.words().len(),
        format_elapsed(elapsed)
    ));
    presenter.message(&session.share_text());
    Ok(true)
}
