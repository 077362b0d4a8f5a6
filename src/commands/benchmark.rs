//! Benchmark command
//!
//! Builds many grids per theme in parallel and measures how often words fail
//! to find a slot.

use crate::grid::{GridBuilder, GridConfig};
use crate::wordlists::Theme;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Placement statistics for one theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeBenchmark {
    pub theme: &'static str,
    pub grids: usize,
    pub words_requested: usize,
    pub words_unplaced: usize,
    pub incomplete_grids: usize,
    /// How often each word was left out
    pub unplaced_counts: FxHashMap<String, usize>,
}

impl ThemeBenchmark {
    /// Fraction of requested words that were left out
    #[must_use]
    pub fn failure_rate(&self) -> f64 {
        if self.words_requested == 0 {
            return 0.0;
        }
        self.words_unplaced as f64 / self.words_requested as f64
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub config: GridConfig,
    pub themes: Vec<ThemeBenchmark>,
    pub duration: Duration,
    pub grids_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn total_grids(&self) -> usize {
        self.themes.iter().map(|t| t.grids).sum()
    }

    /// Fraction of requested words left out across all themes
    #[must_use]
    pub fn failure_rate(&self) -> f64 {
        let requested: usize = self.themes.iter().map(|t| t.words_requested).sum();
        let unplaced: usize = self.themes.iter().map(|t| t.words_unplaced).sum();
        if requested == 0 {
            return 0.0;
        }
        unplaced as f64 / requested as f64
    }
}

/// Build `grids_per_theme` grids for every theme, seeded `0..grids_per_theme`
///
/// Runs are reproducible: the same arguments always give the same counts.
#[must_use]
pub fn run_benchmark(
    themes: &[Theme],
    grids_per_theme: usize,
    config: GridConfig,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();
    let builder = GridBuilder::new(config);

    let total = (themes.len() * grids_per_theme) as u64;
    let pb = if show_progress {
        ProgressBar::new(total)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let results: Vec<ThemeBenchmark> = themes
        .iter()
        .map(|theme| {
            pb.set_message(theme.name);
            let unplaced: Vec<Vec<String>> = (0..grids_per_theme as u64)
                .into_par_iter()
                .map(|seed| {
                    let mut rng = StdRng::seed_from_u64(seed);
                    let puzzle = builder.build(theme.words, &mut rng);
                    pb.inc(1);
                    puzzle.unplaced().to_vec()
                })
                .collect();

            let mut unplaced_counts: FxHashMap<String, usize> = FxHashMap::default();
            for word in unplaced.iter().flatten() {
                *unplaced_counts.entry(word.clone()).or_insert(0) += 1;
            }

            let summary = ThemeBenchmark {
                theme: theme.name,
                grids: grids_per_theme,
                words_requested: grids_per_theme * theme.words.len(),
                words_unplaced: unplaced.iter().map(Vec::len).sum(),
                incomplete_grids: unplaced.iter().filter(|u| !u.is_empty()).count(),
                unplaced_counts,
            };
            tracing::debug!(
                theme = theme.name,
                unplaced = summary.words_unplaced,
                incomplete = summary.incomplete_grids,
                "theme benchmarked"
            );
            summary
        })
        .collect();

    pb.finish_with_message("done");

    let duration = start.elapsed();
    let grids = themes.len() * grids_per_theme;
    BenchmarkResult {
        config,
        themes: results,
        duration,
        grids_per_second: grids as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::THEMES;

    const TINY: Theme = Theme {
        id: 0,
        name: "Tiny",
        description: "",
        words: &["TOOLONG", "OK"],
    };

    #[test]
    fn counts_every_grid() {
        let result = run_benchmark(&THEMES[..2], 5, GridConfig::default(), false);
        assert_eq!(result.total_grids(), 10);
        assert_eq!(result.themes[0].words_requested, 5 * THEMES[0].words.len());
        assert!((0.0..=1.0).contains(&result.failure_rate()));
    }

    #[test]
    fn oversized_words_always_fail() {
        let result = run_benchmark(&[TINY], 4, GridConfig::new(3), false);
        let tiny = &result.themes[0];

        assert_eq!(tiny.incomplete_grids, 4);
        assert_eq!(tiny.unplaced_counts.get("TOOLONG"), Some(&4));
        assert_eq!(tiny.unplaced_counts.get("OK"), None);
        assert!((tiny.failure_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn reproducible() {
        let a = run_benchmark(&THEMES[..1], 8, GridConfig::default(), false);
        let b = run_benchmark(&THEMES[..1], 8, GridConfig::default(), false);
        assert_eq!(a.themes, b.themes);
    }

    #[test]
    fn empty_run() {
        let result = run_benchmark(&[], 10, GridConfig::default(), false);
        assert_eq!(result.total_grids(), 0);
        assert!(result.failure_rate().abs() < f64::EPSILON);
    }
}
