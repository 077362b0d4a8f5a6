//! The eight straight-line directions a word can run in

use super::board::Coord;
use std::fmt;

/// Unit step `(dx, dy)`; `y` grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dx: isize,
    pub dy: isize,
}

impl Direction {
    pub const DOWN: Self = Self::new(0, 1);
    pub const RIGHT: Self = Self::new(1, 0);
    pub const DOWN_RIGHT: Self = Self::new(1, 1);
    pub const UP: Self = Self::new(0, -1);
    pub const LEFT: Self = Self::new(-1, 0);
    pub const UP_LEFT: Self = Self::new(-1, -1);
    pub const UP_RIGHT: Self = Self::new(1, -1);
    pub const DOWN_LEFT: Self = Self::new(-1, 1);

    /// All eight directions, in the order `locate` scans them
    pub const ALL: [Self; 8] = [
        Self::DOWN,
        Self::RIGHT,
        Self::DOWN_RIGHT,
        Self::UP,
        Self::LEFT,
        Self::UP_LEFT,
        Self::UP_RIGHT,
        Self::DOWN_LEFT,
    ];

    const fn new(dx: isize, dy: isize) -> Self {
        Self { dx, dy }
    }

    /// The cell `steps` cells away from `start`, if it lies inside a `size`x`size` grid
    #[must_use]
    pub fn offset(self, start: Coord, steps: usize, size: usize) -> Option<Coord> {
        let steps = isize::try_from(steps).ok()?;
        let x = start.x.checked_add_signed(self.dx.checked_mul(steps)?)?;
        let y = start.y.checked_add_signed(self.dy.checked_mul(steps)?)?;
        (x < size && y < size).then_some(Coord { x, y })
    }

    /// Every cell of a `len`-long run from `start`, or `None` if any leaves the grid
    #[must_use]
    pub fn path(self, start: Coord, len: usize, size: usize) -> Option<Vec<Coord>> {
        (0..len).map(|i| self.offset(start, i, size)).collect()
    }

    fn name(self) -> &'static str {
        match (self.dx, self.dy) {
            (0, 1) => "down",
            (1, 0) => "right",
            (1, 1) => "down-right",
            (0, -1) => "up",
            (-1, 0) => "left",
            (-1, -1) => "up-left",
            (1, -1) => "up-right",
            (-1, 1) => "down-left",
            _ => "none",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
