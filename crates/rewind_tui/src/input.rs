//! Keyboard mapping.

use crate::app::Action;
use crossterm::event::KeyCode;
use rewind_tictactoe::Cell;

/// Moves the board cursor for an arrow key, stopping at the edges.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Cell::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps a key press to an action, given the cursor position.
pub fn action_for_key(key: KeyCode, cursor: Cell) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(Action::Cursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCell(cursor.to_index())),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::PlayCell(digit as usize - 1)),
        KeyCode::Char(',') | KeyCode::Char('<') => Some(Action::StepBack),
        KeyCode::Char('.') | KeyCode::Char('>') => Some(Action::StepForward),
        KeyCode::Home => Some(Action::Jump(0)),
        KeyCode::End => Some(Action::JumpLatest),
        _ => None,
    }
}
