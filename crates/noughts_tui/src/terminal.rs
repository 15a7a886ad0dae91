//! Terminal setup, teardown and the blocking event loop.

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::app::{App, Control};
use crate::ui;

/// Runs the interactive UI until the user quits.
///
/// The terminal is restored on every exit path, including panics.
#[instrument]
pub fn run_tui() -> Result<()> {
    info!("Starting noughts TUI");

    install_panic_hook();
    let mut terminal = enter_terminal().context("Failed to set up terminal")?;

    let res = run_app(&mut terminal, App::new());
    let restored = restore_terminal(terminal.backend_mut());

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    res?;
    restored.context("Failed to restore terminal")
}

fn enter_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    let entered = execute!(stdout, EnterAlternateScreen)
        .and_then(|()| Terminal::new(CrosstermBackend::new(io::stdout())));
    if entered.is_err() {
        let _ = restore_terminal(&mut stdout);
    }
    entered
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even if an earlier one fails; the first error is returned.
pub fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen);
    let cursor = execute!(out, Show);
    raw.and(screen).and(cursor)
}

/// Restores the terminal before the default panic message is printed.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal(&mut io::stdout());
        previous(panic_info);
    }));
}

/// Draws and handles keys until the app asks to quit.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release on some platforms).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == Control::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_leaves_screen_and_shows_cursor() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"), "alternate screen not left");
        assert!(written.contains("\x1b[?25h"), "cursor not shown");
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_restore_reports_write_failure() {
        let err = restore_terminal(&mut FailingWriter).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
