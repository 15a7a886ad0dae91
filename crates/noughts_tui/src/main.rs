//! noughts - tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use noughts_tui::{Cli, Command, headless, terminal};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command_or_default() {
        Command::Tui { log_file } => {
            init_file_logging(&log_file)?;
            terminal::run_tui()
        }
        Command::Play { json, events } => {
            init_stderr_logging();
            let engine = headless::run_script(&events);
            if json {
                let out = headless::render_json(&engine).context("Failed to serialize snapshot")?;
                println!("{out}");
            } else {
                print!("{}", headless::render_text(&engine));
            }
            Ok(())
        }
    }
}

/// Sends logs to a file so they don't draw over the UI.
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
