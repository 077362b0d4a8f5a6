//! Line-based Wordle game loop
//!
//! Reads one guess per line from any `BufRead`, so the same loop drives stdin
//! and scripted input.

use crate::core::Word;
use crate::game::{
    Dictionary, Presenter, Rotation, SubmitOutcome, WordleConfig, WordleSession, WordleStats,
    share_text,
};
use rand::Rng;
use std::io::{self, BufRead};

/// Options for a play session
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    pub config: WordleConfig,
    /// Stop after one game instead of offering another (daily puzzle)
    pub single_game: bool,
}

impl PlayOptions {
    #[must_use]
    pub const fn new(config: WordleConfig, single_game: bool) -> Self {
        Self {
            config,
            single_game,
        }
    }
}

/// Play games until the input ends, the player quits, or declines another round
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn run_play<B, P, R>(
    answers: &[Word],
    dictionary: &Dictionary,
    options: PlayOptions,
    input: &mut B,
    presenter: &mut P,
    rng: &mut R,
) -> io::Result<WordleStats>
where
    B: BufRead,
    P: Presenter,
    R: Rng + ?Sized,
{
    let mut stats = WordleStats::new();
    let mut rotation = Rotation::new();

    loop {
        let Some(target) = rotation.pick(answers, rng) else {
            presenter.message("No words to play");
            return Ok(stats);
        };
        let mut session = WordleSession::new(target.clone(), dictionary, options.config);
        tracing::debug!(
            hard_mode = options.config.hard_mode,
            used = rotation.used(),
            answers = answers.len(),
            "new game"
        );
        presenter.render_wordle(&session);

        let outcome = loop {
            presenter.message("Guess ('quit' to exit)");
            let Some(line) = read_line(input)? else {
                return Ok(stats);
            };
            if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
                presenter.message("Thanks for playing!");
                return Ok(stats);
            }

            match session.on_submit(&line) {
                Ok(SubmitOutcome::Continue) => presenter.render_wordle(&session),
                Ok(outcome) => {
                    presenter.render_wordle(&session);
                    break outcome;
                }
                Err(err) => presenter.message(&err.to_string()),
            }
        };

        if outcome == SubmitOutcome::Win {
            stats.record_win(session.attempts());
            presenter.message(&format!("Solved in {}/{}!", session.attempts(), options.config.max_rows));
        } else {
            stats.record_loss();
            presenter.message(&format!("The word was {}", session.target()));
        }
        presenter.message(&share_text(
            session.rows(),
            outcome == SubmitOutcome::Win,
            options.config.max_rows,
        ));
        presenter.message(&format!(
            "Played {} | Win % {} | Streak {} | Max streak {}",
            stats.games_played,
            stats.win_percentage(),
            stats.current_streak,
            stats.max_streak
        ));

        if options.single_game {
            return Ok(stats);
        }

        presenter.message("Play again? (yes/no)");
        match read_line(input)? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {}
            _ => return Ok(stats),
        }
    }
}

/// Next trimmed line, or `None` at end of input
fn read_line<B: BufRead>(input: &mut B) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
