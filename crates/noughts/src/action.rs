//! First-class inbound events for the engine.
//!
//! The presentation layer never mutates engine state directly: it builds a
//! [`Command`] and hands it to [`GameEngine::dispatch`](crate::GameEngine::dispatch).

use super::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One user interaction, as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "command", content = "arg", rename_all = "snake_case")]
pub enum Command {
    /// Leave the start menu.
    #[display("start")]
    StartGame,
    /// Place the next mark at a board index (0-8).
    #[display("play:{}", _0)]
    Play(usize),
    /// Move the history cursor to a recorded move.
    #[display("jump:{}", _0)]
    JumpTo(usize),
    /// Clear the board for a new round, keeping scores.
    #[display("next")]
    NextGame,
    /// Zero the scores and clear the board.
    #[display("reset")]
    ResetScores,
}

/// Why the engine ignored a command.
///
/// None of these reach the player: the engine treats them as no-ops. They
/// exist so callers and logs can tell the cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The start menu has not been dismissed.
    #[display("Game has not started")]
    NotStarted,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The current board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// Board index outside 0-8.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// History index past the last recorded move.
    #[display("Move {} is not in the history (length {})", index, len)]
    MoveOutOfRange {
        /// Requested index.
        index: usize,
        /// History length at the time.
        len: usize,
    },
}

impl std::error::Error for MoveError {}

/// A command string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Cannot parse command '{}': {}", input, reason)]
pub struct CommandParseError {
    /// The offending input.
    pub input: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl CommandParseError {
    fn new(input: &str, reason: &'static str) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl FromStr for Command {
    type Err = CommandParseError;

    /// Parses `start`, `play:N`, `jump:N`, `next` or `reset`.
    ///
    /// `play` also accepts a position label, e.g. `play:center`.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (verb, arg) = match trimmed.split_once(':') {
            Some((verb, arg)) => (verb.trim().to_lowercase(), Some(arg.trim())),
            None => (trimmed.to_lowercase(), None),
        };

        match (verb.as_str(), arg) {
            ("start", None) => Ok(Command::StartGame),
            ("next", None) => Ok(Command::NextGame),
            ("reset", None) => Ok(Command::ResetScores),
            ("play", Some(arg)) => match arg.parse::<usize>() {
                // Raw numbers pass through so the engine can reject them.
                Ok(index) => Ok(Command::Play(index)),
                Err(_) => Position::from_label_or_number(arg)
                    .map(|pos| Command::Play(pos.to_index()))
                    .ok_or_else(|| CommandParseError::new(s, "unknown position")),
            },
            ("jump", Some(arg)) => arg
                .parse::<usize>()
                .map(Command::JumpTo)
                .map_err(|_| CommandParseError::new(s, "move index must be a number")),
            ("play" | "jump", None) => Err(CommandParseError::new(s, "missing argument")),
            ("start" | "next" | "reset", Some(_)) => {
                Err(CommandParseError::new(s, "takes no argument"))
            }
            _ => Err(CommandParseError::new(s, "unknown command")),
        }
    }
}
