//! TUI bootstrap, teardown and subprocess hand-off.

use super::events::run_app;
use crate::process::ActionRunner;
use crate::registry::ServerStore;
use crate::session::SessionState;
use crate::tui::AppState;
use crate::{log_debug, log_error};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self, Stdout},
    path::PathBuf,
};

pub(super) type LauncherTerminal = Terminal<CrosstermBackend<Stdout>>;

#[derive(Debug, Default)]
pub(super) struct TerminalModeGuard {
    active: bool,
}

impl TerminalModeGuard {
    // Terminal mode lifecycle.
    fn enter() -> io::Result<Self> {
        let mut guard = Self::default();
        guard.resume()?;
        Ok(guard)
    }

    /// Hand the terminal back to a child process: cooked mode, main screen.
    pub(super) fn suspend(&mut self) {
        if !self.active {
            return;
        }

        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
        self.active = false;
    }

    pub(super) fn resume(&mut self) -> io::Result<()> {
        if self.active {
            return Ok(());
        }

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        self.active = true;
        Ok(())
    }

    fn cleanup(&mut self) {
        self.suspend();
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Run the interactive launcher until the operator quits.
pub fn run_launcher(store: ServerStore, session: SessionState, runner: ActionRunner, server_config_path: PathBuf) -> io::Result<()> {
    log_debug!("Starting launcher");

    let mut app = AppState::new(store, session, runner, server_config_path);
    let mut mode_guard = TerminalModeGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &mut mode_guard);
    let show_cursor_result = terminal.show_cursor();

    mode_guard.cleanup();

    if let Err(err) = result {
        log_error!("Launcher error: {}", err);
        return Err(err);
    }

    if let Err(err) = show_cursor_result {
        log_error!("Failed to restore cursor visibility: {}", err);
        return Err(err);
    }

    log_debug!("Launcher exited");
    Ok(())
}
