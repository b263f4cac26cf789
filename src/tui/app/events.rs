//! Event loop and subprocess dispatch.

use super::run::{LauncherTerminal, TerminalModeGuard};
use crate::tui::{PendingAction, SessionManager};
use crate::{debug_enabled, log_debug};
use crossterm::event::{self, Event, KeyEventKind};
use std::{
    io,
    time::{Duration, Instant},
};

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub(super) fn run_app(terminal: &mut LauncherTerminal, app: &mut SessionManager, mode_guard: &mut TerminalModeGuard) -> io::Result<()> {
    loop {
        let render_started_at = Instant::now();
        terminal.draw(|frame| app.draw(frame))?;
        if debug_enabled!() {
            log_debug!("TUI frame rendered in {:?}", render_started_at.elapsed());
        }

        if app.should_exit {
            break;
        }

        if event::poll(EVENT_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }

        if let Some(action) = app.take_pending_action() {
            dispatch_action(terminal, app, mode_guard, action)?;
        }
    }

    Ok(())
}

/// Run `action` with the terminal released, then reclaim it and force a full
/// redraw. Test mode never spawns, so the screen stays up.
fn dispatch_action(terminal: &mut LauncherTerminal, app: &mut SessionManager, mode_guard: &mut TerminalModeGuard, action: PendingAction) -> io::Result<()> {
    if app.runner.is_test_mode() {
        app.execute_action(action);
        return Ok(());
    }

    mode_guard.suspend();
    app.execute_action(action);
    mode_guard.resume()?;
    terminal.clear()
}
