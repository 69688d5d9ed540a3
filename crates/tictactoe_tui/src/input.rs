//! Keyboard mapping for the board screen.

use crossterm::event::KeyCode;
use tictactoe_core::Position;

/// What a key asks the board screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardKey {
    /// Move the cursor by (rows, cols).
    Move(isize, isize),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a cell by its 0-8 index.
    PlayIndex(usize),
    /// Return to player setup.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key code to a board action. Digits 1-9 address cells directly.
pub fn board_key(key: KeyCode) -> Option<BoardKey> {
    let action = match key {
        KeyCode::Left | KeyCode::Char('h') => BoardKey::Move(0, -1),
        KeyCode::Right | KeyCode::Char('l') => BoardKey::Move(0, 1),
        KeyCode::Up | KeyCode::Char('k') => BoardKey::Move(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => BoardKey::Move(1, 0),
        KeyCode::Enter | KeyCode::Char(' ') => BoardKey::PlayCursor,
        KeyCode::Char(c @ '1'..='9') => BoardKey::PlayIndex(c as usize - '1' as usize),
        KeyCode::Char('r') => BoardKey::Restart,
        KeyCode::Char('q') | KeyCode::Esc => BoardKey::Quit,
        _ => return None,
    };
    Some(action)
}

/// Moves the cursor, stopping at the board edges.
pub fn move_cursor(cursor: Position, rows: isize, cols: isize) -> Position {
    let row = cursor.row().saturating_add_signed(rows).min(2);
    let col = cursor.col().saturating_add_signed(cols).min(2);
    Position::from_row_col(row, col).unwrap_or(cursor)
}
