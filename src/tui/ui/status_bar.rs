//! Bottom status line: last status message and key hints.

use crate::tui::SessionManager;
use crate::tui::ui::theme::display_width;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

fn hint(key: &'static str, action: &'static str, key_color: Color) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(key_color)),
        Span::styled(action, Style::default().fg(Color::DarkGray)),
    ]
}

impl SessionManager {
    pub(crate) fn render_global_status_bar(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (left_spans, right_spans) = self.build_status_line_sections();
        let base_style = Style::default().fg(Color::Gray);

        let right_width = spans_display_width(&right_spans).min(area.width as usize) as u16;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(right_width)])
            .split(area);

        let left = Paragraph::new(Line::from(left_spans)).style(base_style);
        let right = Paragraph::new(Line::from(right_spans)).style(base_style).alignment(Alignment::Right);
        frame.render_widget(left, chunks[0]);
        frame.render_widget(right, chunks[1]);
    }

    pub(crate) fn build_status_line_sections(&self) -> (Vec<Span<'static>>, Vec<Span<'static>>) {
        if self.editor.is_some() {
            return (self.build_summary_spans(), Self::build_form_hint_spans());
        }
        if self.command_prompt.is_some() {
            return (self.build_summary_spans(), Self::build_prompt_hint_spans());
        }
        (self.build_summary_spans(), Self::build_list_hint_spans())
    }

    fn build_summary_spans(&self) -> Vec<Span<'static>> {
        let mut left = vec![
            Span::styled("Servers", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(" ", Style::default()),
            Span::styled(format!("{}/{}", self.visible.len(), self.store.len()), Style::default().fg(Color::White)),
        ];
        if !self.checked.is_empty() {
            left.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            left.push(Span::styled(format!("{} checked", self.checked.len()), Style::default().fg(Color::Green)));
        }
        if self.runner.is_test_mode() {
            left.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
            left.push(Span::styled("TEST", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
        }
        if let Some(message) = &self.status_message {
            left.push(Span::styled(" || ", Style::default().fg(Color::DarkGray)));
            left.push(Span::styled(message.clone(), Style::default().fg(Color::Yellow)));
        }
        left
    }

    fn build_list_hint_spans() -> Vec<Span<'static>> {
        [
            hint("Enter", ":login | ", Color::Green),
            hint("Space", ":check | ", Color::Cyan),
            hint("^X", ":run | ", Color::Cyan),
            hint("^_", ":user | ", Color::Cyan),
            hint("^K", ":clear | ", Color::Cyan),
            hint("^N/^E", ":new/edit | ", Color::Cyan),
            hint("Esc", ":quit", Color::Red),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn build_form_hint_spans() -> Vec<Span<'static>> {
        [
            hint("Tab", ":field | ", Color::Cyan),
            hint("Enter", ":select | ", Color::Green),
            hint("Esc", ":cancel", Color::Red),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn build_prompt_hint_spans() -> Vec<Span<'static>> {
        [hint("Enter", ":run | ", Color::Green), hint("Esc", ":cancel", Color::Red)]
            .into_iter()
            .flatten()
            .collect()
    }
}

fn spans_display_width(spans: &[Span<'static>]) -> usize {
    spans.iter().map(|span| display_width(span.content.as_ref())).sum()
}

#[cfg(test)]
#[path = "../../test/tui/ui/status_bar.rs"]
mod tests;
