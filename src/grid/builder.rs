//! Randomised word-search grid construction
//!
//! Words are placed longest first along one of eight straight directions.
//! For each word the directions are shuffled and each is tried from a bounded
//! number of random start cells; a placement is accepted when every cell is
//! empty or already holds the same letter. Words that find no slot are left
//! out and reported, never aborting the build. Remaining cells are filled with
//! uniformly random letters.

use super::board::{Coord, Grid};
use super::direction::Direction;
use rand::Rng;
use rand::seq::SliceRandom;
use std::cmp::Reverse;

/// Grid side length used when none is given
pub const DEFAULT_GRID_SIZE: usize = 9;

/// Random start cells tried per direction before moving to the next one
pub const DEFAULT_ATTEMPTS_PER_DIRECTION: usize = 50;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Configuration for grid generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    pub size: usize,
    pub attempts_per_direction: usize,
}

impl GridConfig {
    #[must_use]
    pub const fn new(size: usize) -> Self {
        Self {
            size,
            attempts_per_direction: DEFAULT_ATTEMPTS_PER_DIRECTION,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

/// Where a word was committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub word: String,
    pub start: Coord,
    pub direction: Direction,
}

impl Placement {
    /// Cells covered by this placement, in reading order
    #[must_use]
    pub fn path(&self) -> Vec<Coord> {
        (0..self.word.len())
            .map(|i| Coord {
                x: self.start.x.wrapping_add_signed(self.direction.dx * i as isize),
                y: self.start.y.wrapping_add_signed(self.direction.dy * i as isize),
            })
            .collect()
    }
}

/// A generated puzzle: the filled grid plus what was and was not placed
#[derive(Debug, Clone)]
pub struct WordGrid {
    grid: Grid,
    /// Every requested word, uppercased, in request order
    requested: Vec<String>,
    placements: Vec<Placement>,
    unplaced: Vec<String>,
}

impl WordGrid {
    /// Wrap a ready-made grid, recording where each of `words` can be found
    ///
    /// Words that do not occur in `grid` are reported as unplaced.
    #[must_use]
    pub fn from_grid<S: AsRef<str>>(grid: Grid, words: &[S]) -> Self {
        let requested = normalise(words);
        let mut placements = Vec::new();
        let mut unplaced = Vec::new();

        for word in requested.iter().cloned() {
            let path = grid.locate(&word);
            let Some(&start) = path.first() else {
                unplaced.push(word);
                continue;
            };
            let direction = path.get(1).map_or(Direction::RIGHT, |next| Direction {
                dx: next.x as isize - start.x as isize,
                dy: next.y as isize - start.y as isize,
            });
            placements.push(Placement {
                word,
                start,
                direction,
            });
        }

        Self {
            grid,
            requested,
            placements,
            unplaced,
        }
    }

    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Committed placements, in placement (longest-first) order
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Words that could not be fitted, uppercased
    #[must_use]
    pub fn unplaced(&self) -> &[String] {
        &self.unplaced
    }

    /// True when every requested word made it into the grid
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Uppercased words that were placed, in the order they were requested
    pub fn placed_words(&self) -> impl Iterator<Item = &str> {
        self.requested
            .iter()
            .filter(|w| self.placements.iter().any(|p| p.word == **w))
            .map(String::as_str)
    }

    /// See [`Grid::locate`]
    #[must_use]
    pub fn locate(&self, word: &str) -> Vec<Coord> {
        self.grid.locate(word)
    }
}

/// Builds word-search grids for a given configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct GridBuilder {
    config: GridConfig,
}

impl GridBuilder {
    #[must_use]
    pub const fn new(config: GridConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> GridConfig {
        self.config
    }

    /// Place `words` into a fresh grid and fill the rest with noise
    ///
    /// Words are uppercased. Empty or non-alphabetic words are reported as
    /// unplaced. Equal-length words keep their input order.
    pub fn build<S, R>(&self, words: &[S], rng: &mut R) -> WordGrid
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let size = self.config.size;
        let mut canvas = Canvas::new(size);
        let mut placements = Vec::new();
        let mut unplaced = Vec::new();

        let requested = normalise(words);
        let mut sorted = requested.clone();
        sorted.sort_by_key(|w| Reverse(w.len()));

        for word in sorted {
            let placeable = !word.is_empty() && word.bytes().all(|b| b.is_ascii_uppercase());
            let found = if placeable {
                self.find_slot(&canvas, word.as_bytes(), rng)
            } else {
                None
            };

            if let Some((start, direction)) = found {
                canvas.commit(word.as_bytes(), start, direction);
                tracing::debug!(word = %word, %start, %direction, "placed word");
                placements.push(Placement {
                    word,
                    start,
                    direction,
                });
            } else {
                tracing::warn!(word = %word, size, "could not place word");
                unplaced.push(word);
            }
        }

        WordGrid {
            grid: canvas.fill(rng),
            requested,
            placements,
            unplaced,
        }
    }

    fn find_slot<R: Rng + ?Sized>(
        &self,
        canvas: &Canvas,
        word: &[u8],
        rng: &mut R,
    ) -> Option<(Coord, Direction)> {
        let size = canvas.size;
        if size == 0 || word.len() > size {
            return None;
        }

        let mut directions = Direction::ALL;
        directions.shuffle(rng);

        for direction in directions {
            for _ in 0..self.config.attempts_per_direction {
                let start = Coord {
                    x: rng.random_range(0..size),
                    y: rng.random_range(0..size),
                };
                if canvas.fits(word, start, direction) {
                    return Some((start, direction));
                }
            }
        }

        None
    }
}

/// Place `words` into a `size`x`size` grid using the default attempt budget
///
/// # Examples
/// ```
/// use puzzle_grove::grid::build;
///
/// let puzzle = build(&["CAT", "CATFISH"], 9, &mut rand::rng());
/// for word in puzzle.placed_words() {
///     assert_eq!(puzzle.locate(word).len(), word.len());
/// }
/// ```
pub fn build<S, R>(words: &[S], size: usize, rng: &mut R) -> WordGrid
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    GridBuilder::new(GridConfig::new(size)).build(words, rng)
}

fn normalise<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words
        .iter()
        .map(|w| w.as_ref().trim().to_ascii_uppercase())
        .collect()
}

/// Grid under construction; `None` marks a virgin cell
struct Canvas {
    size: usize,
    cells: Vec<Option<u8>>,
}

impl Canvas {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn fits(&self, word: &[u8], start: Coord, direction: Direction) -> bool {
        (0..word.len()).all(|i| {
            direction
                .offset(start, i, self.size)
                .is_some_and(|c| self.cells[c.y * self.size + c.x].is_none_or(|l| l == word[i]))
        })
    }

    fn commit(&mut self, word: &[u8], start: Coord, direction: Direction) {
        for (i, &letter) in word.iter().enumerate() {
            if let Some(c) = direction.offset(start, i, self.size) {
                self.cells[c.y * self.size + c.x] = Some(letter);
            }
        }
    }

    fn fill<R: Rng + ?Sized>(self, rng: &mut R) -> Grid {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| ALPHABET[rng.random_range(0..ALPHABET.len())]))
            .collect();
        Grid::from_cells(self.size, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn assert_reads_back(puzzle: &WordGrid) {
        for placement in puzzle.placements() {
            let path = placement.path();
            assert_eq!(puzzle.grid().read(&path), placement.word);

            let located = puzzle.locate(&placement.word);
            assert_eq!(located.len(), placement.word.len());
            assert_eq!(puzzle.grid().read(&located), placement.word);
        }
    }

    #[test]
    fn places_all_theme_words() {
        let words = ["OAK", "MAPLE", "PINE", "BIRCH", "CEDAR", "WILLOW", "PALM"];
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        let puzzle = build(&words, 12, &mut rng);

        assert!(puzzle.is_complete(), "unplaced: {:?}", puzzle.unplaced());
        assert_eq!(puzzle.placements().len(), words.len());
        assert_reads_back(&puzzle);
    }

    #[test]
    fn grid_is_fully_populated_with_uppercase_letters() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let puzzle = build(&["RAIN", "SNOW"], 15, &mut rng);

        let grid = puzzle.grid();
        assert_eq!(grid.size(), 15);
        assert_eq!(grid.rows().count(), 15);
        for row in grid.rows() {
            assert_eq!(row.len(), 15);
            assert!(row.iter().all(u8::is_ascii_uppercase));
        }
    }

    #[test]
    fn cat_and_catfish_share_a_grid() {
        for seed in 0..20 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let puzzle = build(&["CAT", "CATFISH"], 7, &mut rng);

            assert!(puzzle.is_complete(), "seed {seed}: {:?}", puzzle.unplaced());
            // Longest first
            assert_eq!(puzzle.placements()[0].word, "CATFISH");
            assert_reads_back(&puzzle);
        }
    }

    #[test]
    fn word_longer_than_grid_is_left_out() {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let puzzle = build(&["JELLYFISH", "CRAB"], 5, &mut rng);

        assert_eq!(puzzle.unplaced(), ["JELLYFISH"]);
        assert_eq!(puzzle.placements().len(), 1);
        assert_eq!(puzzle.placements()[0].word, "CRAB");
        assert!(puzzle.grid().rows().flatten().all(u8::is_ascii_uppercase));
    }

    #[test]
    fn crowded_grid_never_overwrites_letters() {
        // 2x2 with conflicting words: at most the compatible ones survive
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let puzzle = build(&["AB", "CD", "EF", "GH", "IJ"], 2, &mut rng);

        assert_eq!(puzzle.placements().len() + puzzle.unplaced().len(), 5);
        assert_reads_back(&puzzle);
    }

    #[test]
    fn invalid_words_are_reported_not_placed() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let puzzle = build(&["", "HIP-HOP", "jazz"], 9, &mut rng);

        assert_eq!(puzzle.placements().len(), 1);
        assert_eq!(puzzle.placements()[0].word, "JAZZ");
        assert!(puzzle.unplaced().contains(&"HIP-HOP".to_string()));
        assert!(puzzle.unplaced().contains(&String::new()));
    }

    #[test]
    fn zero_sized_grid_places_nothing() {
        let mut rng = ChaCha20Rng::seed_from_u64(0);
        let puzzle = build(&["A"], 0, &mut rng);
        assert_eq!(puzzle.unplaced(), ["A"]);
        assert_eq!(puzzle.grid().size(), 0);
    }

    #[test]
    fn same_seed_same_grid() {
        let words = ["STAR", "MOON", "COMET"];
        let a = build(&words, 9, &mut ChaCha20Rng::seed_from_u64(42));
        let b = build(&words, 9, &mut ChaCha20Rng::seed_from_u64(42));
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.placements(), b.placements());
    }

    #[test]
    fn wraps_fixed_grid() {
        let grid = Grid::from_rows(&["TACX", "XDXX", "XXOX", "XXXG"]).unwrap();
        let puzzle = WordGrid::from_grid(grid, &["cat", "dog", "cow"]);

        assert_eq!(puzzle.unplaced(), ["COW"]);
        assert_eq!(puzzle.placements()[0].start, Coord::new(2, 0));
        assert_eq!(puzzle.placements()[0].direction, Direction::LEFT);
        assert_eq!(puzzle.placements()[1].direction, Direction::DOWN_RIGHT);
        assert_reads_back(&puzzle);
    }

    #[test]
    fn placed_words_keep_request_order() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let puzzle = build(&["oak", "Maple", "WILLOW", "JACARANDA"], 8, &mut rng);

        assert_eq!(puzzle.placements()[0].word, "WILLOW");
        assert_eq!(puzzle.unplaced(), ["JACARANDA"]);
        assert_eq!(puzzle.placed_words().collect::<Vec<_>>(), ["OAK", "MAPLE", "WILLOW"]);
    }

    #[test]
    fn zero_attempts_places_nothing() {
        let config = GridConfig {
            size: 9,
            attempts_per_direction: 0,
        };
        let puzzle = GridBuilder::new(config).build(&["OAK"], &mut ChaCha20Rng::seed_from_u64(0));
        assert!(!puzzle.is_complete());
        assert_eq!(puzzle.grid().size(), 9);
    }
}
