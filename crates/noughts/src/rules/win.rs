//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight three-in-a-row lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The three positions of this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Winning lines, checked in this order: rows, columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    Line([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    Line([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    Line([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    Line([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first completed line and the player who owns it.
#[instrument]
pub fn find_win(board: &Board) -> Option<(Player, Line)> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let player = board.get(a).player()?;
        (board.get(a) == board.get(b) && board.get(a) == board.get(c)).then_some((player, line))
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    find_win(board).map(|(player, _)| player)
}

/// Returns the completed line, if any.
pub fn winning_line(board: &Board) -> Option<Line> {
    find_win(board).map(|(_, line)| line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        marks.iter().fold(Board::new(), |board, &(i, player)| {
            board.with_mark(Position::from_index(i).unwrap(), player)
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board).map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Player::O), (4, Player::O), (6, Player::O)]);
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(winning_line(&board).map(|l| l.indices()), Some([2, 4, 6]));
    }

    #[test]
    fn test_winner_middle_column() {
        let board = board_with(&[(1, Player::O), (4, Player::O), (7, Player::O)]);
        assert_eq!(winning_line(&board).map(|l| l.indices()), Some([1, 4, 7]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_reported() {
        // Top row and left column both complete; rows are checked first.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (3, Player::X),
            (6, Player::X),
        ]);
        assert_eq!(winning_line(&board).map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_line_contains() {
        let line = LINES[6];
        assert!(line.contains(Position::Center));
        assert!(!line.contains(Position::TopRight));
    }
}
