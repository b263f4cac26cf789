//! Server form rendering.

use crate::tui::ui::theme;
use crate::tui::{EditorField, EditorMode, SessionManager};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

impl SessionManager {
    pub(crate) fn render_editor_modal(&self, frame: &mut Frame, full_area: Rect) {
        let Some(form) = &self.editor else {
            return;
        };

        let width = full_area.width.clamp(44, 74);
        let height = if form.error.is_some() { 10 } else { 9 };
        let area = Self::centered_rect(width, height, full_area);

        let title = match form.mode {
            EditorMode::Create => " New Server ",
            EditorMode::Edit => " Edit Server ",
        };
        frame.render_widget(Clear, area);
        let block = Block::default().borders(Borders::ALL).border_style(theme::border()).title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let label_style = |field: EditorField| if field == form.selected { theme::focus() } else { theme::label() };
        let text_value = |field: EditorField, text: &str| {
            if field == form.selected {
                format!("{}_", text)
            } else {
                text.to_string()
            }
        };

        let hostname_value = if form.hostname_locked() {
            Span::styled(form.hostname.clone(), theme::label())
        } else {
            Span::styled(text_value(EditorField::Hostname, &form.hostname), theme::value())
        };

        let mut lines = vec![
            Line::from(vec![Span::styled("Hostname: ", label_style(EditorField::Hostname)), hostname_value]),
            Line::from(vec![
                Span::styled("Alias:    ", label_style(EditorField::Alias)),
                Span::styled(text_value(EditorField::Alias, &form.alias), theme::value()),
            ]),
            Line::from(vec![
                Span::styled("Tags:     ", label_style(EditorField::Tags)),
                Span::styled(text_value(EditorField::Tags, &form.tags), theme::value()),
            ]),
            Line::from(Span::styled("          (separate tags with spaces)", theme::label())),
            Line::from(""),
            Line::from(vec![
                Span::styled("[ Save ]", label_style(EditorField::Save)),
                Span::raw("  "),
                Span::styled("[ Cancel ]", label_style(EditorField::Cancel)),
            ]),
        ];

        if let Some(error) = &form.error {
            lines.push(Line::from(vec![Span::styled(error.clone(), theme::error())]));
        }

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
