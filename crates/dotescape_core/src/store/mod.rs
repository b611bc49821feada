//! Persistence of an unfinished game between sessions.

mod error;
mod json;
mod memory;

pub use error::StoreError;
pub use json::JsonFileStore;
pub use memory::MemoryStore;

use crate::board::Board;

/// Storage for one saved board.
///
/// `load` never fails: a missing, unreadable or invalid save yields `None`
/// so the caller starts a fresh game.
pub trait GameStore {
    /// Returns the saved board, if a valid one exists.
    fn load(&mut self) -> Option<Board>;

    /// Saves `board`, replacing any previous save.
    fn save(&mut self, board: &Board) -> Result<(), StoreError>;
}
