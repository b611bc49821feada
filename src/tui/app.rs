//! Application state and logic.

use crossterm::event::KeyCode;
use dotescape_core::{Board, Coordinate, Presenter};
use tracing::debug;

use super::input;

const PROMPT: &str = "Block a cell. The dot steps toward the edge.";

/// Main application state; receives updates from the game controller.
#[derive(Debug)]
pub struct App {
    board: Board,
    cursor: Coordinate,
    can_undo: bool,
    can_redo: bool,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            cursor: Coordinate::new(0, 0),
            can_undo: false,
            can_redo: false,
            status_message: PROMPT.to_string(),
        }
    }

    /// Last board pushed by the controller.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether undo is possible.
    pub fn can_undo(&self) -> bool {
        self.can_undo
    }

    /// Whether redo is possible.
    pub fn can_redo(&self) -> bool {
        self.can_redo
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key, self.board.size());
    }

    /// Replaces the status message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for App {
    fn on_update(&mut self, board: &Board) {
        debug!(moves = board.move_count(), "Board updated");
        if !board.contains(self.cursor) {
            self.cursor = Coordinate::new(0, 0);
        }
        self.board = board.clone();
        self.status_message = PROMPT.to_string();
    }

    fn on_undo_available(&mut self, available: bool) {
        self.can_undo = available;
    }

    fn on_redo_available(&mut self, available: bool) {
        self.can_redo = available;
    }

    fn on_won(&mut self, move_count: u32) {
        self.status_message = format!(
            "You won in {} moves! Press 'n' for a new board.",
            move_count
        );
    }

    fn on_lost(&mut self) {
        self.status_message = format!(
            "You lost: the dot is trapped after {} moves. Press 'n' or 'u'.",
            self.board.move_count()
        );
    }
}
