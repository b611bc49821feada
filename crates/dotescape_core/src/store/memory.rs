//! In-memory storage.

use super::{GameStore, StoreError};
use crate::board::Board;

/// Keeps the saved board in memory; useful for tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<Board>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `board`.
    pub fn with_board(board: Board) -> Self {
        Self { slot: Some(board) }
    }

    /// The stored board, without consuming it.
    pub fn peek(&self) -> Option<&Board> {
        self.slot.as_ref()
    }
}

impl GameStore for MemoryStore {
    fn load(&mut self) -> Option<Board> {
        self.slot.take()
    }

    fn save(&mut self, board: &Board) -> Result<(), StoreError> {
        self.slot = Some(board.clone());
        Ok(())
    }
}
