//! Server form keyboard handling.

use crate::tui::{EditorField, SessionManager};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl SessionManager {
    pub(crate) fn handle_editor_key(&mut self, key: KeyEvent) {
        let mut should_submit = false;
        let mut should_close = false;

        if let Some(form) = self.editor.as_mut() {
            match key.code {
                KeyCode::Esc => should_close = true,
                KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => should_close = true,
                KeyCode::Tab | KeyCode::Down => form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
                KeyCode::Enter => match form.selected {
                    EditorField::Save => should_submit = true,
                    EditorField::Cancel => should_close = true,
                    _ => form.focus_next(),
                },
                KeyCode::Backspace => form.backspace(),
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT) => {
                    form.insert_char(ch);
                }
                _ => {}
            }
        }

        if should_submit {
            self.submit_editor();
        } else if should_close {
            self.editor = None;
        }
    }

    /// Validate and apply the open form. On a validation error the form stays
    /// open with the message shown inline.
    pub(crate) fn submit_editor(&mut self) {
        let Some(mut form) = self.editor.take() else {
            return;
        };

        if let Err(err) = self.submit_edit(&form.hostname, &form.alias, &form.tags) {
            form.error = Some(err.to_string());
            form.selected = EditorField::Hostname;
            self.editor = Some(form);
        }
    }
}

#[cfg(test)]
#[path = "../../../test/tui/features/editor/input.rs"]
mod tests;
