//! Remote command prompt keyboard handling.

use crate::tui::{PendingAction, SessionManager};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl SessionManager {
    pub(crate) fn handle_command_prompt_key(&mut self, key: KeyEvent) {
        let mut should_submit = false;
        let mut should_close = false;

        if let Some(prompt) = self.command_prompt.as_mut() {
            match key.code {
                KeyCode::Esc => should_close = true,
                KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => should_close = true,
                KeyCode::Enter => should_submit = true,
                KeyCode::Backspace => {
                    prompt.error = None;
                    prompt.command.pop();
                }
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT) => {
                    prompt.error = None;
                    prompt.command.push(ch);
                }
                _ => {}
            }
        }

        if should_submit {
            self.submit_command_prompt();
        } else if should_close {
            self.command_prompt = None;
        }
    }

    pub(crate) fn submit_command_prompt(&mut self) {
        let Some(prompt) = self.command_prompt.as_mut() else {
            return;
        };

        let command = prompt.command.trim().to_string();
        if command.is_empty() {
            prompt.error = Some("Command is required".to_string());
            return;
        }

        let hostnames = prompt.targets.clone();
        self.command_prompt = None;
        self.pending_action = Some(PendingAction::RemoteCommand {
            identity: self.session.identity().to_string(),
            hostnames,
            command,
        });
    }
}

#[cfg(test)]
#[path = "../../../test/tui/features/command_prompt/input.rs"]
mod tests;
