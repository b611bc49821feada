//! Error types for board, turn and history operations.

use crate::geometry::Coordinate;
use crate::history::HistoryKind;

/// Error raised by [`Board`](crate::Board) queries and mutations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The coordinate lies outside the board.
    #[display("Coordinate {} is outside the board", _0)]
    OutOfRange(Coordinate),

    /// The cell cannot be blocked: it is already blocked, holds the marker,
    /// or lies outside the board.
    #[display("Cell {} is not available", _0)]
    InvalidMove(Coordinate),

    /// A textual board layout could not be parsed.
    #[display("Malformed board layout: {}", _0)]
    Malformed(String),
}

impl std::error::Error for BoardError {}

/// Error that can occur when validating or applying a player's selection.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The selected cell is not free.
    #[display("Cell {} is not free", _0)]
    CellUnavailable(Coordinate),

    /// The selected cell is not on the board.
    #[display("Cell {} is outside the board", _0)]
    OutOfRange(Coordinate),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfRange(c) => Self::OutOfRange(c),
            BoardError::InvalidMove(c) => Self::CellUnavailable(c),
            BoardError::Malformed(msg) => Self::InvariantViolation(msg),
        }
    }
}

/// Error returned when undo or redo is requested with nothing recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The named list has no entries.
    #[display("Nothing to {}", _0)]
    Empty(HistoryKind),
}

impl std::error::Error for HistoryError {}
