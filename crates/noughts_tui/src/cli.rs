//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default log file for the interactive UI.
pub const DEFAULT_LOG_FILE: &str = "noughts.log";

/// noughts - tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe for two players at one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The chosen subcommand, falling back to the interactive UI.
    pub fn command_or_default(self) -> Command {
        self.command.unwrap_or(Command::Tui {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        })
    }
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the interactive terminal UI
    Tui {
        /// File that receives log output while the UI owns the screen
        #[arg(long, default_value = DEFAULT_LOG_FILE)]
        log_file: PathBuf,
    },

    /// Apply a scripted list of events and print the final state
    Play {
        /// Print the full snapshot as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Events: start, play:N, jump:N, next, reset (N is 0-based)
        #[arg(required = true)]
        events: Vec<noughts::Command>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_runs_tui() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(
            cli.command_or_default(),
            Command::Tui {
                log_file: PathBuf::from(DEFAULT_LOG_FILE)
            }
        );
    }

    #[test]
    fn test_play_parses_events() {
        let cli = Cli::try_parse_from(["noughts", "play", "--json", "start", "play:4", "jump:0"])
            .unwrap();
        assert_eq!(
            cli.command_or_default(),
            Command::Play {
                json: true,
                events: vec![
                    noughts::Command::StartGame,
                    noughts::Command::Play(4),
                    noughts::Command::JumpTo(0),
                ],
            }
        );
    }

    #[test]
    fn test_bad_event_rejected() {
        assert!(Cli::try_parse_from(["noughts", "play", "undo"]).is_err());
    }
}
