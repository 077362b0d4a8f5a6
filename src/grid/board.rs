//! Fully populated square letter grid and word lookup

use super::direction::Direction;
use std::fmt;

/// Column/row position; `(0, 0)` is the top-left cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// True if `other` is one of the eight neighbouring cells
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let near_x = self.x.abs_diff(other.x) <= 1;
        let near_y = self.y.abs_diff(other.y) <= 1;
        near_x && near_y && !(self.x == other.x && self.y == other.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A `size`x`size` matrix of uppercase ASCII letters with no empty cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Wrap row-major cells; `cells.len()` must equal `size * size`
    pub(crate) fn from_cells(size: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Build a grid from text rows, e.g. for fixed puzzles
    ///
    /// Returns `None` unless every row has as many letters as there are rows
    /// and every cell is an ASCII letter. Letters are uppercased.
    ///
    /// # Examples
    /// ```
    /// use puzzle_grove::grid::Grid;
    ///
    /// let grid = Grid::from_rows(&["cat", "xox", "zzz"]).unwrap();
    /// assert_eq!(grid.size(), 3);
    /// assert!(Grid::from_rows(&["ab", "c"]).is_none());
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);

        for row in rows {
            if row.len() != size || !row.bytes().all(|b| b.is_ascii_alphabetic()) {
                return None;
            }
            cells.extend(row.bytes().map(|b| b.to_ascii_uppercase()));
        }

        Some(Self { size, cells })
    }

    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Letter at `coord`, or `None` outside the grid
    #[inline]
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<u8> {
        (coord.x < self.size && coord.y < self.size).then(|| self.cells[coord.y * self.size + coord.x])
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks(0) panics; an empty grid simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    /// Letters read off along `path`; cells outside the grid are skipped
    #[must_use]
    pub fn read(&self, path: &[Coord]) -> String {
        path.iter()
            .filter_map(|&c| self.get(c))
            .map(char::from)
            .collect()
    }

    /// Find a straight-line occurrence of `word`
    ///
    /// Scans cells row-major and, for each cell holding the first letter, tries
    /// the directions in [`Direction::ALL`] order. Returns the first full match
    /// as an ordered path, or an empty vector if the word does not occur.
    /// Matching is case-insensitive.
    ///
    /// # Examples
    /// ```
    /// use puzzle_grove::grid::{Coord, Grid};
    ///
    /// let grid = Grid::from_rows(&["cat", "xox", "zzz"]).unwrap();
    /// assert_eq!(
    ///     grid.locate("cat"),
    ///     vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)]
    /// );
    /// assert!(grid.locate("dog").is_empty());
    /// ```
    #[must_use]
    pub fn locate(&self, word: &str) -> Vec<Coord> {
        let word = word.to_ascii_uppercase();
        let letters = word.as_bytes();
        let Some(&first) = letters.first() else {
            return Vec::new();
        };

        for y in 0..self.size {
            for x in 0..self.size {
                let start = Coord { x, y };
                if self.get(start) != Some(first) {
                    continue;
                }
                for direction in Direction::ALL {
                    if let Some(path) = self.match_run(start, direction, letters) {
                        return path;
                    }
                }
            }
        }

        Vec::new()
    }

    fn match_run(&self, start: Coord, direction: Direction, letters: &[u8]) -> Option<Vec<Coord>> {
        let path = direction.path(start, letters.len(), self.size)?;
        path.iter()
            .zip(letters)
            .all(|(&c, &letter)| self.get(c) == Some(letter))
            .then_some(path)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(|&b| char::from(b).to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Grid {
        // TAC reads right-to-left as CAT on the top row; DOG runs down-right
        Grid::from_rows(&[
            "TACX", //
            "XDXX", //
            "XXOX", //
            "XXXG", //
        ])
        .unwrap()
    }

    #[test]
    fn locate_backwards_word() {
        let grid = fixture();
        let path = grid.locate("CAT");
        assert_eq!(path, vec![Coord::new(2, 0), Coord::new(1, 0), Coord::new(0, 0)]);
        assert_eq!(grid.read(&path), "CAT");
    }

    #[test]
    fn locate_diagonal_word() {
        let grid = fixture();
        assert_eq!(
            grid.locate("dog"),
            vec![
                Coord::new(1, 1),
                Coord::new(2, 2),
                Coord::new(3, 3),
            ]
        );
    }

    #[test]
    fn locate_missing_or_empty_word() {
        let grid = fixture();
        assert!(grid.locate("COW").is_empty());
        assert!(grid.locate("").is_empty());
        assert!(grid.locate("TACXY").is_empty());
    }

    #[test]
    fn locate_prefers_row_major_then_direction_order() {
        // AB appears twice: rightwards from (0,0) and downwards from (0,0);
        // DOWN is scanned before RIGHT.
        let grid = Grid::from_rows(&["AB", "BX"]).unwrap();
        assert_eq!(grid.locate("AB"), vec![Coord::new(0, 0), Coord::new(0, 1)]);
    }

    #[test]
    fn single_letter_word() {
        let grid = fixture();
        assert_eq!(grid.locate("G"), vec![Coord::new(3, 3)]);
    }

    #[test]
    fn get_outside_grid() {
        let grid = fixture();
        assert_eq!(grid.get(Coord::new(0, 0)), Some(b'T'));
        assert_eq!(grid.get(Coord::new(4, 0)), None);
    }

    #[test]
    fn adjacency() {
        let c = Coord::new(1, 1);
        assert!(c.is_adjacent(Coord::new(0, 0)));
        assert!(c.is_adjacent(Coord::new(2, 1)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(3, 1)));
    }

    #[test]
    fn display_rows() {
        let grid = Grid::from_rows(&["ab", "cd"]).unwrap();
        assert_eq!(grid.to_string(), "A B\nC D\n");
    }
}
