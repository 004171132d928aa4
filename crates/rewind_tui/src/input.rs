//! Key bindings for the terminal front end.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// A user intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Play at this cell.
    Play(Position),
    /// Play at the cursor.
    PlayCursor,
    /// Move the board cursor.
    MoveCursor(KeyCode),
    /// Jump one step back in history.
    StepBack,
    /// Jump one step forward in history.
    StepForward,
    /// Jump to the game start.
    FirstStep,
    /// Jump to the newest move.
    LatestStep,
    /// Flip the move list order.
    ToggleSort,
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Decodes a key press, or `None` for unbound keys.
pub fn intent_for(key: KeyCode) -> Option<Intent> {
    let intent = match key {
        KeyCode::Char(c @ '1'..='9') => {
            let cell = c.to_digit(10)? as usize - 1;
            Intent::Play(Position::from_index(cell)?)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Intent::PlayCursor,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Intent::MoveCursor(key),
        KeyCode::Char('[') | KeyCode::PageUp => Intent::StepBack,
        KeyCode::Char(']') | KeyCode::PageDown => Intent::StepForward,
        KeyCode::Home => Intent::FirstStep,
        KeyCode::End => Intent::LatestStep,
        KeyCode::Char('s') => Intent::ToggleSort,
        KeyCode::Char('r') => Intent::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Intent::Quit,
        _ => return None,
    };
    Some(intent)
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}
