//! Undo/redo snapshots of the board.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::Board;
use crate::error::HistoryError;

/// Which history list an operation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum HistoryKind {
    /// Snapshots taken before each move.
    Undo,
    /// Snapshots taken before each undo.
    Redo,
}

/// Two stacks of board snapshots.
///
/// Every recorded move clears the redo stack: once a new move is made the
/// undone branch is unreachable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    undo: Vec<Board>,
    redo: Vec<Board>,
    capacity: Option<usize>,
}

impl History {
    /// Creates an unbounded history.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history keeping at most `limit` undo entries.
    ///
    /// The oldest entries are dropped first.
    #[instrument]
    pub fn with_capacity(limit: usize) -> Self {
        Self {
            capacity: Some(limit),
            ..Self::default()
        }
    }

    /// Records the pre-move snapshot of a successful move.
    #[instrument(skip_all, fields(move_count = snapshot.move_count()))]
    pub fn record(&mut self, snapshot: Board) {
        self.redo.clear();
        self.push_undo(snapshot);
    }

    /// Steps back: returns the previous board and stores `current` for redo.
    ///
    /// Returns `None` and changes nothing if there is nothing to undo.
    #[instrument(skip_all)]
    pub fn undo(&mut self, current: &Board) -> Option<Board> {
        let previous = self.undo.pop()?;
        self.redo.push(current.clone());
        debug!(undo = self.undo.len(), redo = self.redo.len(), "Undo applied");
        Some(previous)
    }

    /// Steps forward: returns the undone board and stores `current` for undo.
    ///
    /// Returns `None` and changes nothing if there is nothing to redo.
    #[instrument(skip_all)]
    pub fn redo(&mut self, current: &Board) -> Option<Board> {
        let next = self.redo.pop()?;
        self.push_undo(current.clone());
        debug!(undo = self.undo.len(), redo = self.redo.len(), "Redo applied");
        Some(next)
    }

    /// Like [`History::undo`], reporting an empty list as an error.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Empty`] if there is nothing to undo.
    pub fn try_undo(&mut self, current: &Board) -> Result<Board, HistoryError> {
        self.undo(current)
            .ok_or(HistoryError::Empty(HistoryKind::Undo))
    }

    /// Like [`History::redo`], reporting an empty list as an error.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Empty`] if there is nothing to redo.
    pub fn try_redo(&mut self, current: &Board) -> Result<Board, HistoryError> {
        self.redo(current)
            .ok_or(HistoryError::Empty(HistoryKind::Redo))
    }

    /// Drops every snapshot.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    /// Whether an undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undo entries.
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of redo entries.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    fn push_undo(&mut self, snapshot: Board) {
        self.undo.push(snapshot);
        if let Some(limit) = self.capacity
            && self.undo.len() > limit
        {
            let excess = self.undo.len() - limit;
            self.undo.drain(..excess);
        }
    }
}
