//! Hexagonal adjacency on a rectangular lattice.
//!
//! Rows are offset by parity: even rows sit half a cell to the left of odd
//! rows, so a cell has two neighbors above, two beside and two below.
//!
//! ```text
//!  0   1   2   3        row 0 (even)
//!    0   1   2   3      row 1 (odd)
//!  0   1   2   3        row 2 (even)
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A cell coordinate on the board, `(column, row)`, zero-indexed.
///
/// Coordinates are signed so that neighbors of edge cells can be formed
/// and rejected by bounds checks instead of wrapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({col}, {row})")]
pub struct Coordinate {
    /// Column index.
    pub col: i32,
    /// Row index.
    pub row: i32,
}

impl Coordinate {
    /// Creates a coordinate.
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The six adjacent coordinates, in [`HexDirection`] order.
    ///
    /// Results may fall outside the board; callers filter with
    /// [`Coordinate::is_within`].
    pub fn neighbors(self) -> [Coordinate; 6] {
        let mut out = [self; 6];
        for (slot, dir) in out.iter_mut().zip(HexDirection::iter()) {
            *slot = dir.step_from(self);
        }
        out
    }

    /// Whether `self` lies on a board of `size` × `size` cells.
    pub fn is_within(self, size: usize) -> bool {
        let size = size as i64;
        (0..size).contains(&(self.col as i64)) && (0..size).contains(&(self.row as i64))
    }

    /// Whether `self` is on the outer ring of a `size` × `size` board.
    pub fn is_on_border(self, size: usize) -> bool {
        let last = size as i32 - 1;
        self.col == 0 || self.col == last || self.row == 0 || self.row == last
    }

    /// Whether `other` is one hex step away from `self`.
    pub fn is_adjacent(self, other: Coordinate) -> bool {
        self.neighbors().contains(&other)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

/// One of the six hex step directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum::Display)]
pub enum HexDirection {
    /// Up and to the left.
    UpLeft,
    /// Up and to the right.
    UpRight,
    /// Same row, one column left.
    Left,
    /// Same row, one column right.
    Right,
    /// Down and to the left.
    DownLeft,
    /// Down and to the right.
    DownRight,
}

impl HexDirection {
    /// Applies this step to `from`.
    ///
    /// Diagonal steps depend on row parity: on even rows the upper and lower
    /// neighbors are at columns `col - 1` and `col`, on odd rows at `col` and
    /// `col + 1`.
    pub fn step_from(self, from: Coordinate) -> Coordinate {
        let delta = if from.row % 2 == 0 { 1 } else { 0 };
        let Coordinate { col, row } = from;
        match self {
            Self::UpLeft => Coordinate::new(col - delta, row - 1),
            Self::UpRight => Coordinate::new(col - delta + 1, row - 1),
            Self::Left => Coordinate::new(col - 1, row),
            Self::Right => Coordinate::new(col + 1, row),
            Self::DownLeft => Coordinate::new(col - delta, row + 1),
            Self::DownRight => Coordinate::new(col - delta + 1, row + 1),
        }
    }
}
