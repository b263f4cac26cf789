//! Remote command prompt rendering.

use crate::tui::SessionManager;
use crate::tui::ui::theme;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const MAX_LISTED_TARGETS: usize = 3;

impl SessionManager {
    pub(crate) fn render_command_prompt_modal(&self, frame: &mut Frame, full_area: Rect) {
        let Some(prompt) = &self.command_prompt else {
            return;
        };

        let width = full_area.width.clamp(44, 90);
        let height = if prompt.error.is_some() { 7 } else { 6 };
        let area = Self::centered_rect(width, height, full_area);

        frame.render_widget(Clear, area);
        let block = Block::default().borders(Borders::ALL).border_style(theme::border()).title(" Remote Command ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut targets = prompt.targets.iter().take(MAX_LISTED_TARGETS).cloned().collect::<Vec<_>>().join(", ");
        if prompt.targets.len() > MAX_LISTED_TARGETS {
            targets.push_str(&format!(" (+{} more)", prompt.targets.len() - MAX_LISTED_TARGETS));
        }

        let mut lines = vec![
            Line::from(vec![
                Span::styled("As:      ", theme::label()),
                Span::styled(self.session.identity().to_string(), theme::value()),
            ]),
            Line::from(vec![Span::styled("Servers: ", theme::label()), Span::styled(targets, theme::value())]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Command: ", theme::focus()),
                Span::styled(format!("{}_", prompt.command), theme::value()),
            ]),
        ];

        if let Some(error) = &prompt.error {
            lines.push(Line::from(vec![Span::styled(error.clone(), theme::error())]));
        }

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
    }
}
