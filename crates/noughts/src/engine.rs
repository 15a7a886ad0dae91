//! The game engine: canonical session state behind commands and queries.

use super::action::{Command, MoveError};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::phases::{GamePhase, GameStatus};
use super::rules::{self, Evaluation, Line};
use super::scores::Scores;
use super::snapshot::Snapshot;
use super::{Board, History, Player, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe session: move history, scores and phase.
///
/// Commands that cannot apply (occupied square, decided board, menu still
/// showing) leave the state untouched. The `try_*` variants report why.
/// Status, winner and draw are recomputed from the board on every query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    history: History,
    scores: Scores,
    phase: GamePhase,
}

impl GameEngine {
    /// A fresh session at the start menu.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Leaves the start menu. No-op once started.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) {
        if self.phase == GamePhase::NotStarted {
            info!("Game started");
            self.phase = GamePhase::InProgress;
        }
    }

    /// Places the next mark at board index `index`, ignoring illegal moves.
    ///
    /// Out-of-range indices are a caller bug and panic in debug builds.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) {
        debug_assert!(index < 9, "board index {} out of range", index);
        if let Err(e) = self.try_play(index) {
            debug!(error = %e, "Move ignored");
        }
    }

    /// Places the next mark at board index `index`.
    ///
    /// Returns the player who moved. A winning move adds to that player's
    /// score; the point stays even if the history is later rewound.
    ///
    /// # Errors
    ///
    /// - [`MoveError::NotStarted`] before [`start_game`](Self::start_game)
    /// - [`MoveError::OutOfBounds`] for indices past 8
    /// - [`MoveError::GameOver`] when the current board has a winner
    /// - [`MoveError::SquareOccupied`] when the square is taken
    #[instrument(skip(self), fields(current_move = self.history.current_move()))]
    pub fn try_play(&mut self, index: usize) -> Result<Player, MoveError> {
        if self.phase != GamePhase::InProgress {
            return Err(MoveError::NotStarted);
        }
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        let board = self.history.current();
        if rules::check_winner(board).is_some() {
            return Err(MoveError::GameOver);
        }
        if !board.is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let player = self.history.to_move();
        let next = board.with_mark(position, player);

        if let Some(winner) = rules::check_winner(&next) {
            info!(%winner, "Round won");
            self.scores.record_win(winner);
        } else if rules::is_draw(&next) {
            info!("Round drawn");
        }

        self.history.record(next);

        debug_assert_eq!(
            HistoryInvariants::check_all(&self.history),
            Ok(()),
            "history invariants violated after move"
        );

        debug!(%player, %position, "Move played");
        Ok(player)
    }

    /// Moves the history cursor to `index`, ignoring unknown moves.
    ///
    /// Out-of-range indices are a caller bug and panic in debug builds.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        debug_assert!(
            index < self.history.len(),
            "move index {} out of range (history length {})",
            index,
            self.history.len()
        );
        if let Err(e) = self.try_jump_to(index) {
            debug!(error = %e, "Jump ignored");
        }
    }

    /// Moves the history cursor to `index`. History and scores are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::MoveOutOfRange`] if `index` is not a recorded move.
    #[instrument(skip(self))]
    pub fn try_jump_to(&mut self, index: usize) -> Result<(), MoveError> {
        self.history.jump_to(index)
    }

    /// Starts a new round on an empty board. Scores and phase are kept.
    #[instrument(skip(self))]
    pub fn next_game(&mut self) {
        info!("New round");
        self.history.reset();
    }

    /// Zeroes both scores and starts a new round.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        info!("Scores reset");
        self.scores.reset();
        self.next_game();
    }

    /// Routes an inbound event to the matching command.
    ///
    /// # Errors
    ///
    /// Passes through the error of [`try_play`](Self::try_play) or
    /// [`try_jump_to`](Self::try_jump_to); the state is unchanged in that case.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> Result<(), MoveError> {
        match command {
            Command::StartGame => self.start_game(),
            Command::Play(index) => {
                self.try_play(index)?;
            }
            Command::JumpTo(index) => self.try_jump_to(index)?,
            Command::NextGame => self.next_game(),
            Command::ResetScores => self.reset_scores(),
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// The board at the history cursor.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// The full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Number of recorded boards, including the empty one.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the board being shown.
    pub fn current_move(&self) -> usize {
        self.history.current_move()
    }

    /// Session scores.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// Session phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Player to move on the current board.
    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    /// Rules evaluation of the current board.
    pub fn evaluate(&self) -> Evaluation {
        rules::evaluate(self.board())
    }

    /// Winning line of the current board, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self.board())
    }

    /// Winner, draw, or who moves next.
    pub fn status(&self) -> GameStatus {
        let eval = self.evaluate();
        match eval.winner {
            Some(player) => GameStatus::Winner(player),
            None if eval.is_draw => GameStatus::Draw,
            None => GameStatus::NextPlayer(self.to_move()),
        }
    }

    /// Whether board index `index` is part of the winning line.
    pub fn is_winning_square(&self, index: usize) -> bool {
        debug_assert!(index < 9, "board index {} out of range", index);
        match (self.winning_line(), Position::from_index(index)) {
            (Some(line), Some(pos)) => line.contains(pos),
            _ => false,
        }
    }

    /// Squares that would accept a move right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.phase != GamePhase::InProgress || self.evaluate().winner.is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.board())
    }

    /// All outbound queries at once.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
