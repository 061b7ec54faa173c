//! Keyboard mapping and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use strictly_five::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the cursor.
    Move(KeyCode),
    /// Click the square under the cursor.
    Click,
    /// Press the reset button.
    Reset,
    /// Leave the game.
    Quit,
}

/// Maps a key event to an action, ignoring releases and unbound keys.
pub fn key_action(key: KeyEvent) -> Option<KeyAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        KeyCode::Char('r') => Some(KeyAction::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::Click),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(KeyAction::Move(code))
        }
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the grid edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (d_row, d_col) = match key {
        KeyCode::Up => (-1, 0),
        KeyCode::Down => (1, 0),
        KeyCode::Left => (0, -1),
        KeyCode::Right => (0, 1),
        _ => return cursor,
    };
    cursor.offset(d_row, d_col).unwrap_or(cursor)
}
