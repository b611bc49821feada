//! Core domain types for the escape game.

use serde::{Deserialize, Serialize};

/// Status of a single cell.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum CellStatus {
    /// Open for the marker and for the player to block.
    #[default]
    Free,
    /// Permanently blocked.
    Blocked,
    /// Holds the marker.
    Occupied,
}

impl CellStatus {
    /// Whether the marker may pass through this cell.
    pub fn is_free(self) -> bool {
        self == Self::Free
    }

    /// Single-character rendering used by board layouts.
    pub fn symbol(self) -> char {
        match self {
            Self::Free => '.',
            Self::Blocked => '#',
            Self::Occupied => '@',
        }
    }

    /// Parses the character produced by [`CellStatus::symbol`].
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Free),
            '#' => Some(Self::Blocked),
            '@' => Some(Self::Occupied),
            _ => None,
        }
    }
}
