//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Nothing here is stored: the engine
//! recomputes every derived value from the current board.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, Line, check_winner, find_win, winning_line};

use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Everything the rules can say about one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Owner of the first completed line.
    pub winner: Option<Player>,
    /// The first completed line, in [`LINES`] order.
    pub winning_line: Option<Line>,
    /// Full board and no winner.
    pub is_draw: bool,
}

impl Evaluation {
    /// Whether the round is decided, by a win or a draw.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }
}

/// Evaluates a board: winner, winning line and draw flag.
#[instrument]
pub fn evaluate(board: &Board) -> Evaluation {
    match find_win(board) {
        Some((player, line)) => Evaluation {
            winner: Some(player),
            winning_line: Some(line),
            is_draw: false,
        },
        None => Evaluation {
            winner: None,
            winning_line: None,
            is_draw: is_full(board),
        },
    }
}
