//! Server list rendering.

use crate::tui::SessionManager;
use crate::tui::ui::theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const CHECK_COLUMN_WIDTH: usize = 3;
const NAME_COLUMN_WIDTH: usize = 24;
const CHECK_MARK: &str = "✔";

impl SessionManager {
    pub(crate) fn render_title_bar(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new("GWKit").alignment(Alignment::Center).style(theme::title());
        frame.render_widget(title, area);
    }

    pub(crate) fn render_session_status(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).border_style(theme::border()).title(" Status ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [user_area, keyword_area] = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(inner);
        let username = Line::from(vec![
            Span::styled("Username : ", theme::label()),
            Span::styled(self.session.identity().to_string(), theme::value()),
        ]);
        let keyword = Line::from(vec![
            Span::styled("Keyword : ", theme::label()),
            Span::styled(self.session.keyword().to_string(), theme::focus()),
        ]);
        frame.render_widget(Paragraph::new(username), user_area);
        frame.render_widget(Paragraph::new(keyword), keyword_area);
    }

    pub(crate) fn render_server_list(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().borders(Borders::ALL).border_style(theme::border()).title(" Server List ");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let viewport_height = inner.height as usize;
        self.update_scroll(viewport_height);

        let items: Vec<ListItem> = self
            .visible
            .iter()
            .skip(self.scroll_offset)
            .take(viewport_height)
            .filter_map(|id| self.store.record(*id))
            .map(|record| ListItem::new(self.server_row_line(record)))
            .collect();

        if items.is_empty() {
            let message = if self.store.is_empty() { "No servers registered (^N to add)" } else { "No match" };
            frame.render_widget(Paragraph::new(message).style(theme::label()), inner);
            return;
        }

        let list = List::new(items).highlight_style(theme::list_item_focus());
        let mut state = ListState::default();
        state.select(Some(self.selected_row.saturating_sub(self.scroll_offset)));
        frame.render_stateful_widget(list, inner, &mut state);
    }

    fn server_row_line(&self, record: &crate::registry::ServerRecord) -> Line<'static> {
        let mark = if self.is_checked(record.hostname()) { CHECK_MARK } else { "" };
        Line::from(vec![
            Span::styled(format!(" {}", theme::fit_to_display_width(mark, CHECK_COLUMN_WIDTH - 1)), theme::check_mark()),
            Span::styled(
                format!(" {} ", theme::fit_to_display_width(record.display_name(), NAME_COLUMN_WIDTH - 2)),
                theme::list_item(),
            ),
            Span::styled(record.tags_legacy_text(), theme::label()),
        ])
    }
}
