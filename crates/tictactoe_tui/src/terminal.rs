//! Interactive terminal session.

use crate::app::{Action, App};
use crate::config::TuiConfig;
use crate::ui;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Restores the terminal on drop: raw mode off, main screen back, cursor shown.
///
/// Exists from the moment raw mode is on, so a later setup failure or panic
/// also restores the terminal.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enables raw mode and switches to the alternate screen.
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen)
            .context("Failed to enter alternate screen")?;
        debug!("Terminal prepared");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
        if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
    }
}

/// Runs the interactive UI until the player quits.
#[instrument(skip_all, fields(tick_rate_ms = *config.tick_rate_ms()))]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let res = run_app(&mut terminal, App::new(), config.tick_rate());
    drop(guard);

    if let Err(e) = &res {
        error!(error = ?e, "UI loop failed");
    }
    info!("TUI exited");
    res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Action::Quit
        {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::terminal::is_raw_mode_enabled;

    #[test]
    fn test_guard_leaves_raw_mode_off() {
        // Under a test harness there may be no tty, so `enter` can fail
        // part way through setup.
        let entered = TerminalGuard::enter();
        drop(entered);
        assert!(!is_raw_mode_enabled().unwrap_or(false));
    }
}
