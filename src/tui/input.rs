//! Key bindings and cursor movement.

use crossterm::event::KeyCode;
use dotescape_core::Coordinate;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor with an arrow key.
    Cursor(KeyCode),
    /// Block the cell under the cursor.
    Select,
    /// Take back the last move.
    Undo,
    /// Replay an undone move.
    Redo,
    /// Start a new board.
    Reset,
    /// Save and leave.
    Quit,
}

/// Maps a key to its action.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char('u') => Some(Action::Undo),
        KeyCode::Char('r') => Some(Action::Redo),
        KeyCode::Char('n') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, staying on a board of `size`.
pub fn move_cursor(cursor: Coordinate, key: KeyCode, size: usize) -> Coordinate {
    let last = size.saturating_sub(1) as i32;
    let Coordinate { col, row } = cursor;

    match key {
        KeyCode::Up => Coordinate::new(col, (row - 1).max(0)),
        KeyCode::Down => Coordinate::new(col, (row + 1).min(last)),
        KeyCode::Left => Coordinate::new((col - 1).max(0), row),
        KeyCode::Right => Coordinate::new((col + 1).min(last), row),
        // No change for other keys
        _ => cursor,
    }
}
