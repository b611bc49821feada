//! Contract-based validation for player selections.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use tracing::{instrument, warn};

use crate::board::Board;
use crate::error::MoveError;
use crate::geometry::Coordinate;
use crate::invariants::{BoardInvariants, InvariantSet, describe};
use crate::types::CellStatus;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the selected cell is on the board and free.
pub struct CellIsFree;

impl CellIsFree {
    /// Validates the selection against `board`.
    #[instrument(skip(board))]
    pub fn check(cell: &Coordinate, board: &Board) -> Result<(), MoveError> {
        match board.status(*cell)? {
            CellStatus::Free => Ok(()),
            _ => Err(MoveError::CellUnavailable(*cell)),
        }
    }
}

/// Contract for a player's selection.
///
/// Preconditions:
/// - The cell is on the board and free
///
/// Postconditions:
/// - The move counter advanced by exactly one
/// - Exactly one more cell is blocked
/// - The marker stayed put or stepped to an adjacent cell
/// - Board invariants hold
pub struct SelectContract;

impl Contract<Board, Coordinate> for SelectContract {
    fn pre(board: &Board, cell: &Coordinate) -> Result<(), MoveError> {
        CellIsFree::check(cell, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), MoveError> {
        if after.move_count() != before.move_count() + 1 {
            warn!(
                before = before.move_count(),
                after = after.move_count(),
                "Move counter did not advance by one"
            );
            return Err(MoveError::InvariantViolation(
                "Move counter must advance by one per turn".to_string(),
            ));
        }

        if blocked_count(after) != blocked_count(before) + 1 {
            return Err(MoveError::InvariantViolation(
                "Exactly one cell must be blocked per turn".to_string(),
            ));
        }

        let stepped = match (before.marker(), after.marker()) {
            (Some(from), Some(to)) => from == to || from.is_adjacent(to),
            (None, None) => true,
            _ => false,
        };
        if !stepped {
            return Err(MoveError::InvariantViolation(
                "Marker must move at most one step per turn".to_string(),
            ));
        }

        BoardInvariants::check_all(after).map_err(|violations| {
            MoveError::InvariantViolation(format!("Postcondition failed: {}", describe(&violations)))
        })
    }
}

fn blocked_count(board: &Board) -> usize {
    board
        .cells()
        .filter(|(_, status)| *status == CellStatus::Blocked)
        .count()
}
