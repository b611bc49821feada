//! JSON file storage.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use super::{GameStore, StoreError};
use crate::board::Board;
use crate::invariants::{check_board, describe};

/// Saves the board as a JSON file.
///
/// A successful `load` removes the file, so a save is resumed at most once.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates the file without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the file cannot be read or parsed, or holds
    /// a board that breaks board invariants.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn read(&self) -> Result<Board, StoreError> {
        let content = std::fs::read_to_string(&self.path)?;
        let board: Board = serde_json::from_str(&content)?;
        check_board(&board)
            .map_err(|violations| StoreError::new(format!("Invalid board: {}", describe(&violations))))?;
        Ok(board)
    }
}

impl GameStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&mut self) -> Option<Board> {
        if !self.path.exists() {
            debug!("No saved game");
            return None;
        }

        let board = match self.read() {
            Ok(board) => board,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable saved game");
                return None;
            }
        };

        if let Err(e) = std::fs::remove_file(&self.path) {
            warn!(error = %e, "Could not remove saved game after loading");
        }

        info!(
            size = board.size(),
            moves = board.move_count(),
            "Saved game loaded"
        );
        Some(board)
    }

    #[instrument(skip(self, board), fields(path = %self.path.display()))]
    fn save(&mut self, board: &Board) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(board)?;
        std::fs::write(&self.path, content)?;
        info!(moves = board.move_count(), "Game saved");
        Ok(())
    }
}
