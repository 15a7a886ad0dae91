//! Terminal front end for the noughts tic-tac-toe engine.
//!
//! Two ways in: an interactive ratatui UI ([`run_tui`]) and a headless
//! script runner ([`run_script`]) that replays events and prints the result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod headless;
pub mod input;
pub mod terminal;
pub mod ui;

pub use app::{App, Control, Focus, MenuOption, Screen};
pub use cli::{Cli, Command};
pub use headless::{render_json, render_text, run_script};
pub use terminal::{run_app, run_tui};
