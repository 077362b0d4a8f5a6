//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles, keyboard_lines, pending_row};
use crate::commands::{BenchmarkResult, EvaluationResult};
use crate::core::WORD_LENGTH;
use crate::game::{Presenter, WordSearchSession, WordSearchStats, WordleSession, WordleStats};
use crate::grid::{Coord, WordGrid};
use colored::Colorize;

/// Presenter that draws games to stdout with ANSI colours
#[derive(Debug, Default)]
pub struct CliPresenter;

impl CliPresenter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Presenter for CliPresenter {
    fn render_wordle(&mut self, session: &WordleSession<'_>) {
        let config = session.config();
        println!("\n{}", "─".repeat(40).cyan());
        println!(
            " {} {}",
            "PUZZLE GROVE WORDLE".bright_cyan().bold(),
            if config.hard_mode {
                "(hard mode)".red().to_string()
            } else {
                String::new()
            }
        );
        println!("{}", "─".repeat(40).cyan());

        for row in session.rows() {
            println!("  {}", feedback_tiles(&row.word, &row.feedback));
        }
        let remaining = config.max_rows.saturating_sub(session.attempts());
        if remaining > 0 && !session.status().is_over() {
            println!("  {}", pending_row(session.current_input(), WORD_LENGTH));
            for _ in 1..remaining {
                println!("  {}", pending_row("", WORD_LENGTH).bright_black());
            }
        }

        println!();
        for line in keyboard_lines(session.keyboard()) {
            println!("  {line}");
        }
        println!();
    }

    fn render_word_search(&mut self, session: &WordSearchSession) {
        println!("\n{}", "─".repeat(40).cyan());
        println!(" {}", session.theme().bright_cyan().bold());
        println!("{}", "─".repeat(40).cyan());

        let size = session.grid().size();
        for y in 0..size {
            let line: String = (0..size)
                .filter_map(|x| session.cell_state(Coord::new(x, y)))
                .map(|cell| {
                    let text = format!(" {} ", cell.letter);
                    if cell.selected {
                        text.black().on_yellow().bold().to_string()
                    } else if cell.found {
                        text.black().on_green().to_string()
                    } else {
                        text
                    }
                })
                .collect();
            println!("  {line}");
        }

        println!();
        let words: Vec<String> = session
            .words()
            .iter()
            .map(|w| {
                if session.is_found(w) {
                    w.green().bold().to_string()
                } else {
                    "_".repeat(w.len()).bright_black().to_string()
                }
            })
            .collect();
        println!("  {}", words.join("  "));
        println!(
            "  Found {}/{} | Hints used: {}\n",
            session.found_words().count(),
            session.words().len(),
            session.hints_used()
        );
    }

    fn message(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Print a single scored guess
pub fn print_evaluation(result: &EvaluationResult) {
    println!(
        "\n  {}  {}",
        feedback_tiles(&result.guess, &result.feedback),
        result.feedback.to_emoji()
    );
    let states: Vec<String> = result
        .feedback
        .states()
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("  {}\n", states.join(", ").bright_black());
}

/// Print where every word was placed, and which were left out
pub fn print_placements(puzzle: &WordGrid) {
    println!("{}", "Placements:".bright_cyan().bold());
    for placement in puzzle.placements() {
        println!(
            "  {} {} {}",
            format!("{:<12}", placement.word).bright_white().bold(),
            placement.start,
            placement.direction
        );
    }
    print_unplaced(puzzle);
}

/// Warn about words that did not fit
pub fn print_unplaced(puzzle: &WordGrid) {
    if !puzzle.is_complete() {
        println!(
            "{} {}",
            "Could not place:".yellow().bold(),
            puzzle.unplaced().join(", ")
        );
    }
}

pub fn print_stats(stats: &WordleStats) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:      {}", stats.games_played);
    println!("   Win %:       {}", stats.win_percentage());
    println!("   Streak:      {}", stats.current_streak);
    println!("   Max streak:  {}", stats.max_streak);

    let max = stats.distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 20);
        println!("   {}: {} {count}", i + 1, bar.green());
    }
}

pub fn print_word_search_stats(stats: &WordSearchStats) {
    println!("\n📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:       {}", stats.games_played);
    println!("   Words found:  {}", stats.total_words_found);
    println!("   Hints used:   {}", stats.total_hints_used);
    println!("   Avg. time:    {} min", stats.average_minutes());
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "GRID BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Grid size:        {0}x{0} ({1} attempts per direction)",
        result.config.size, result.config.attempts_per_direction
    );
    println!("   Grids built:      {}", result.total_grids());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Grids/second:     {:.1}", result.grids_per_second);
    println!(
        "   Failure rate:     {}",
        format!("{:.2}%", result.failure_rate() * 100.0)
            .bright_yellow()
            .bold()
    );

    println!("\n📈 {}", "By theme:".bright_cyan().bold());
    for theme in &result.themes {
        let pct = theme.failure_rate() * 100.0;
        let bar = create_progress_bar(pct, 100.0, 30);
        println!(
            "   {:<20} {} {pct:5.2}% ({} of {} grids incomplete)",
            theme.theme,
            bar.red(),
            theme.incomplete_grids,
            theme.grids
        );

        let mut worst: Vec<(&String, &usize)> = theme.unplaced_counts.iter().collect();
        worst.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (word, count) in worst.iter().take(3) {
            println!("       {} missed {count}x", word.bright_black());
        }
    }
}
