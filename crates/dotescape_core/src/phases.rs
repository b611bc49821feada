//! Observable game phases.

use serde::{Deserialize, Serialize};

/// Phase reported to the front end.
///
/// The resolving step between a selection and its outcome happens inside
/// [`GameInPlay::select`](crate::GameInPlay::select) and never outlives
/// the call, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Waiting for the player to block a cell.
    AwaitingPlayerMove,
    /// The marker reached the border.
    Won,
    /// The marker was encircled.
    Lost,
}

impl Phase {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingPlayerMove)
    }
}
