//! Puzzle Grove - CLI
//!
//! Terminal front end for the Wordle and word-search engines.

use anyhow::Result;
use chrono::Datelike;
use clap::{Parser, Subcommand};
use puzzle_grove::{
    commands::{
        PlayOptions, evaluate_pair, new_search, run_benchmark, run_play, run_search_game,
        select_theme,
    },
    game::{Dictionary, Presenter, WordSearchStats, WordleConfig},
    grid::{DEFAULT_GRID_SIZE, GridConfig},
    output::{
        CliPresenter, print_benchmark_result, print_evaluation, print_placements, print_stats,
        print_unplaced, print_word_search_stats,
    },
    rng::DailyLcg,
    wordlists::{ANSWERS, THEMES, loader::load_wordle_words, loader::words_from_slice},
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "puzzle_grove",
    about = "Wordle and word-search puzzles in the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log debug events to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play Wordle (default)
    Play {
        /// Every revealed hint must be used in the next guess
        #[arg(long)]
        hard: bool,

        /// Answer list, one five-letter word per line
        #[arg(short = 'w', long)]
        wordlist: Option<PathBuf>,

        /// Today's puzzle: the same word for everyone on the same date
        #[arg(long)]
        daily: bool,
    },

    /// Score a single guess against a target word
    Evaluate {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },

    /// Generate a themed word-search grid
    Search {
        /// Theme id (1-10); random if omitted
        #[arg(short, long)]
        theme: Option<u32>,

        /// Grid side length
        #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,

        /// Seed for a reproducible grid
        #[arg(long, conflicts_with = "daily")]
        seed: Option<u64>,

        /// Today's grid
        #[arg(long)]
        daily: bool,

        /// Highlight every word and list placements
        #[arg(long, conflicts_with = "play")]
        reveal: bool,

        /// Play the grid interactively
        #[arg(long)]
        play: bool,
    },

    /// Measure how often theme words fail to fit
    Benchmark {
        /// Grids to build per theme
        #[arg(short = 'n', long, default_value = "100")]
        grids: usize,

        /// Grid side length
        #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
        size: usize,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "puzzle_grove=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Play {
        hard: false,
        wordlist: None,
        daily: false,
    });

    match command {
        Commands::Play {
            hard,
            wordlist,
            daily,
        } => run_play_command(hard, wordlist.as_deref(), daily),
        Commands::Evaluate { target, guess } => {
            let result = evaluate_pair(&target, &guess)?;
            print_evaluation(&result);
            Ok(())
        }
        Commands::Search {
            theme,
            size,
            seed,
            daily,
            reveal,
            play,
        } => run_search_command(theme, size, seed, daily, reveal, play),
        Commands::Benchmark { grids, size } => {
            println!("Building {grids} grids for each of {} themes...", THEMES.len());
            let result = run_benchmark(THEMES, grids, GridConfig::new(size), true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

/// Generator seeded from today's local date
fn daily_rng() -> DailyLcg {
    let today = chrono::Local::now().date_naive();
    DailyLcg::from_date(today.year().unsigned_abs(), today.month(), today.day())
}

fn run_play_command(hard: bool, wordlist: Option<&Path>, daily: bool) -> Result<()> {
    let answers = match wordlist {
        Some(path) => load_wordle_words(path)?,
        None => words_from_slice(ANSWERS),
    };

    let mut dictionary = Dictionary::new(&words_from_slice(ANSWERS));
    for word in &answers {
        dictionary.insert(word.clone());
    }

    let options = PlayOptions::new(WordleConfig::new(hard), daily);
    let mut presenter = CliPresenter::new();
    let mut input = io::stdin().lock();

    let stats = if daily {
        run_play(&answers, &dictionary, options, &mut input, &mut presenter, &mut daily_rng())?
    } else {
        run_play(&answers, &dictionary, options, &mut input, &mut presenter, &mut rand::rng())?
    };

    if stats.games_played > 0 {
        print_stats(&stats);
    }
    Ok(())
}

fn run_search_command(
    theme_id: Option<u32>,
    size: usize,
    seed: Option<u64>,
    daily: bool,
    reveal: bool,
    play: bool,
) -> Result<()> {
    let mut rng: Box<dyn RngCore> = match (daily, seed) {
        (true, _) => Box::new(daily_rng()),
        (false, Some(seed)) => Box::new(StdRng::seed_from_u64(seed)),
        (false, None) => Box::new(rand::rng()),
    };

    let theme = select_theme(theme_id, &mut *rng)?;
    let mut session = new_search(theme, GridConfig::new(size), &mut *rng);
    let mut presenter = CliPresenter::new();
    presenter.message(theme.description);

    if play {
        let mut stats = WordSearchStats::new();
        let mut input = io::stdin().lock();
        if run_search_game(&mut session, &mut input, &mut presenter, &mut stats, &mut *rng)? {
            print_word_search_stats(&stats);
        }
        return Ok(());
    }

    if reveal {
        while session.reveal(&mut *rng).is_some() {}
        presenter.render_word_search(&session);
        print_placements(session.puzzle());
    } else {
        presenter.render_word_search(&session);
        print_unplaced(session.puzzle());
    }
    Ok(())
}
