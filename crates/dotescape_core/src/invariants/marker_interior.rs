//! Marker interior invariant: while play continues the marker has not
//! escaped.

use super::Invariant;
use crate::board::Board;

/// Invariant: the marker is on the board and not on its border.
///
/// Holds whenever the game awaits a player move; reaching the border ends
/// the game.
pub struct MarkerInteriorInvariant;

impl Invariant<Board> for MarkerInteriorInvariant {
    fn holds(board: &Board) -> bool {
        board
            .marker()
            .is_some_and(|m| board.contains(m) && !board.is_on_border(m))
    }

    fn description() -> &'static str {
        "Marker is inside the border while play continues"
    }
}
