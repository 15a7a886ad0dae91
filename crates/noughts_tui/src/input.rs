//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts::Position;

/// Moves cursor based on arrow keys. Stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps `1`-`9` to board indices 0-8, in reading order.
pub fn digit_to_index(c: char) -> Option<usize> {
    match c.to_digit(10)? {
        d @ 1..=9 => Some(d as usize - 1),
        _ => None,
    }
}
