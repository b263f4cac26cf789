//! Shared UI colors and text-width helpers.

use ratatui::style::{Color, Modifier, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub(crate) fn title() -> Style {
    Style::default().fg(Color::Black).bg(Color::White)
}

pub(crate) fn border() -> Style {
    Style::default().fg(Color::Cyan)
}

pub(crate) fn label() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub(crate) fn value() -> Style {
    Style::default().fg(Color::White)
}

pub(crate) fn focus() -> Style {
    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
}

pub(crate) fn list_item() -> Style {
    Style::default().fg(Color::White)
}

pub(crate) fn list_item_focus() -> Style {
    Style::default().fg(Color::LightBlue).bg(Color::DarkGray).add_modifier(Modifier::BOLD)
}

pub(crate) fn check_mark() -> Style {
    Style::default().fg(Color::Green)
}

pub(crate) fn error() -> Style {
    Style::default().fg(Color::Red)
}

pub(crate) fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Longest prefix of `text` that fits in `max_width` columns.
pub(crate) fn truncate_to_display_width(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    for (byte_index, ch) in text.char_indices() {
        width += UnicodeWidthChar::width(ch).unwrap_or(0);
        if width > max_width {
            return &text[..byte_index];
        }
    }
    text
}

/// Truncate or right-pad `text` to exactly `width` columns.
pub(crate) fn fit_to_display_width(text: &str, width: usize) -> String {
    let truncated = truncate_to_display_width(text, width);
    let padding = width.saturating_sub(display_width(truncated));
    format!("{}{}", truncated, " ".repeat(padding))
}

#[cfg(test)]
#[path = "../../test/tui/ui/theme.rs"]
mod tests;
