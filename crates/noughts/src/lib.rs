//! noughts - a tic-tac-toe engine
//!
//! Pure game logic with no I/O: a presentation layer reads queries from a
//! [`GameEngine`] and sends it [`Command`]s, never touching state directly.
//!
//! # Architecture
//!
//! - **Rules**: pure functions over a [`Board`] (winner, winning line, draw)
//! - **Engine**: move history with a cursor, session scores, start phase
//! - **Invariants**: history properties checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use noughts::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.start_game();
//! for cell in [0, 3, 1, 4, 2] {
//!     engine.play(cell);
//! }
//! assert_eq!(engine.status(), GameStatus::Winner(Player::X));
//! assert_eq!(engine.scores().get(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod history;
mod phases;
mod position;
mod scores;
mod snapshot;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Command, CommandParseError, MoveError};
pub use engine::GameEngine;
pub use history::History;
pub use phases::{GamePhase, GameStatus};
pub use position::Position;
pub use rules::{Evaluation, Line, evaluate};
pub use scores::Scores;
pub use snapshot::Snapshot;
pub use types::{Board, Player, Square};
