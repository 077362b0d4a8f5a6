//! Word-search grids
//!
//! Generation places a list of words along straight lines in a square grid and
//! fills the rest with noise; lookup recovers the cell path of any word.

mod board;
mod builder;
mod direction;

pub use board::{Coord, Grid};
pub use builder::{
    DEFAULT_ATTEMPTS_PER_DIRECTION, DEFAULT_GRID_SIZE, GridBuilder, GridConfig, Placement,
    WordGrid, build,
};
pub use direction::Direction;
