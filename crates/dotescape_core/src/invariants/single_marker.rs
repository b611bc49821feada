//! Single marker invariant: the marker coordinate and the grid agree.

use super::Invariant;
use crate::board::Board;
use crate::types::CellStatus;

/// Invariant: exactly one cell is `Occupied` and it is the marker's cell,
/// or the marker is off the board and no cell is `Occupied`.
pub struct SingleMarkerInvariant;

impl Invariant<Board> for SingleMarkerInvariant {
    fn holds(board: &Board) -> bool {
        let occupied = board
            .cells()
            .filter(|(_, status)| *status == CellStatus::Occupied)
            .count();

        match board.marker() {
            Some(coord) => occupied == 1 && board.status(coord) == Ok(CellStatus::Occupied),
            None => occupied == 0,
        }
    }

    fn description() -> &'static str {
        "Marker position matches the single occupied cell"
    }
}
