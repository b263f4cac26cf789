//! Top-level frame layout.

use crate::tui::SessionManager;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

impl SessionManager {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let [title_area, session_area, list_area, status_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)]).areas(area);

        self.render_title_bar(frame, title_area);
        self.render_session_status(frame, session_area);
        self.render_server_list(frame, list_area);
        self.render_global_status_bar(frame, status_area);

        if self.editor.is_some() {
            self.render_editor_modal(frame, area);
        } else if self.command_prompt.is_some() {
            self.render_command_prompt_modal(frame, area);
        }
    }

    // Shared centered popup helper.
    pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let popup_width = width.min(area.width);
        let popup_height = height.min(area.height);
        let popup_x = area.x + area.width.saturating_sub(popup_width) / 2;
        let popup_y = area.y + area.height.saturating_sub(popup_height) / 2;
        Rect::new(popup_x, popup_y, popup_width, popup_height)
    }
}
