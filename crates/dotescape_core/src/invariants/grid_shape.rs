//! Grid shape invariant: the cell grid is square and within size limits.

use super::Invariant;
use crate::board::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Invariant: `size` lies in [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`] and the
/// grid holds exactly `size * size` cells.
pub struct GridShapeInvariant;

impl Invariant<Board> for GridShapeInvariant {
    fn holds(board: &Board) -> bool {
        let size = board.size();
        (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size)
            && size.checked_mul(size) == Some(board.grid_len())
    }

    fn description() -> &'static str {
        "Grid is square with a supported size"
    }
}
