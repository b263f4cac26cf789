//! Server list keyboard handling.

use crate::tui::{CommandPromptState, EditorState, PendingAction, SessionManager};
use crate::log_debug;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn is_rotate_identity_key(key: &KeyEvent) -> bool {
    // Terminals report Ctrl+_ as 0x1F, which also covers Ctrl+7 and Ctrl+/.
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('_' | '7' | '/'))
}

impl SessionManager {
    /// Route a key to the open modal, or to the server list.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) {
        log_debug!("key pressed - {:?} {:?}", key.code, key.modifiers);
        if self.editor.is_some() {
            self.handle_editor_key(key);
        } else if self.command_prompt.is_some() {
            self.handle_command_prompt_key(key);
        } else {
            self.handle_server_list_key(key);
        }
    }

    pub(crate) fn handle_server_list_key(&mut self, key: KeyEvent) {
        if is_rotate_identity_key(&key) {
            let identity = self.session.rotate_identity().to_string();
            log_debug!("Rotated identity to {}", identity);
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('q') => self.should_exit = true,
                KeyCode::Char('k') => {
                    if self.session.clear() {
                        self.refresh_results();
                    }
                }
                KeyCode::Char('l') => self.checked.clear(),
                KeyCode::Char('x') => self.open_command_prompt(),
                KeyCode::Char('n') => self.editor = Some(EditorState::for_create()),
                KeyCode::Char('e') => self.open_edit_form(),
                KeyCode::Char('t') => self.pending_action = Some(PendingAction::InitCredentials),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_exit = true,
            KeyCode::Backspace => {
                if self.session.delete_last() {
                    self.refresh_results();
                }
            }
            KeyCode::Char(' ') => self.toggle_selected_check(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::ALT) => {
                if self.session.append(ch) {
                    self.refresh_results();
                }
            }
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-(self.page_size as isize)),
            KeyCode::PageDown => self.move_selection(self.page_size as isize),
            KeyCode::Home => self.selected_row = 0,
            KeyCode::End => self.selected_row = self.visible.len().saturating_sub(1),
            KeyCode::Enter => self.queue_login(),
            _ => {}
        }
    }

    pub(crate) fn move_selection(&mut self, delta: isize) {
        if self.visible.is_empty() {
            self.selected_row = 0;
            return;
        }
        let last = self.visible.len() - 1;
        self.selected_row = self.selected_row.saturating_add_signed(delta).min(last);
    }

    pub(crate) fn toggle_selected_check(&mut self) {
        let Some(hostname) = self.selected_record().map(|record| record.hostname().to_string()) else {
            return;
        };
        if !self.checked.remove(&hostname) {
            log_debug!("selecting host - {}", hostname);
            self.checked.insert(hostname);
        }
    }

    fn queue_login(&mut self) {
        let Some(hostname) = self.selected_record().map(|record| record.hostname().to_string()) else {
            self.set_status("No server selected");
            return;
        };
        self.pending_action = Some(PendingAction::Login {
            identity: self.session.identity().to_string(),
            hostname,
        });
    }

    /// Checked hostnames still in the registry, or the selected record when
    /// nothing is checked.
    pub(crate) fn command_targets(&self) -> Vec<String> {
        let checked: Vec<String> = self
            .checked
            .iter()
            .filter(|hostname| self.store.get(hostname).is_some())
            .cloned()
            .collect();
        if !checked.is_empty() {
            return checked;
        }
        self.selected_record()
            .map(|record| vec![record.hostname().to_string()])
            .unwrap_or_default()
    }

    fn open_command_prompt(&mut self) {
        let targets = self.command_targets();
        if targets.is_empty() {
            self.set_status("No server selected");
            return;
        }
        self.command_prompt = Some(CommandPromptState::new(targets));
    }

    fn open_edit_form(&mut self) {
        match self.selected_record().map(EditorState::for_edit) {
            Some(form) => self.editor = Some(form),
            None => self.set_status("No server selected"),
        }
    }
}

#[cfg(test)]
#[path = "../../../test/tui/features/server_list/input.rs"]
mod tests;
