//! Create/edit server form state.

use crate::registry::ServerRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditorField {
    Hostname,
    Alias,
    Tags,
    Save,
    Cancel,
}

impl EditorField {
    // Focus traversal helpers.
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Hostname => Self::Alias,
            Self::Alias => Self::Tags,
            Self::Tags => Self::Save,
            Self::Save => Self::Cancel,
            Self::Cancel => Self::Hostname,
        }
    }

    pub(crate) fn prev(self) -> Self {
        match self {
            Self::Hostname => Self::Cancel,
            Self::Alias => Self::Hostname,
            Self::Tags => Self::Alias,
            Self::Save => Self::Tags,
            Self::Cancel => Self::Save,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EditorMode {
    Create,
    /// Editing an existing record; the hostname cannot change.
    Edit,
}

#[derive(Debug, Clone)]
pub(crate) struct EditorState {
    pub(crate) mode: EditorMode,
    pub(crate) hostname: String,
    pub(crate) alias: String,
    pub(crate) tags: String,
    pub(crate) selected: EditorField,
    pub(crate) error: Option<String>,
}

impl EditorState {
    pub(crate) fn for_create() -> Self {
        Self {
            mode: EditorMode::Create,
            hostname: String::new(),
            alias: String::new(),
            tags: String::new(),
            selected: EditorField::Hostname,
            error: None,
        }
    }

    pub(crate) fn for_edit(record: &ServerRecord) -> Self {
        Self {
            mode: EditorMode::Edit,
            hostname: record.hostname().to_string(),
            alias: record.alias().unwrap_or_default().to_string(),
            tags: record.tags_text(),
            selected: EditorField::Alias,
            error: None,
        }
    }

    pub(crate) fn hostname_locked(&self) -> bool {
        self.mode == EditorMode::Edit
    }

    pub(crate) fn focus_next(&mut self) {
        self.selected = self.selected.next();
        if self.hostname_locked() && self.selected == EditorField::Hostname {
            self.selected = self.selected.next();
        }
    }

    pub(crate) fn focus_prev(&mut self) {
        self.selected = self.selected.prev();
        if self.hostname_locked() && self.selected == EditorField::Hostname {
            self.selected = self.selected.prev();
        }
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.selected {
            EditorField::Hostname if !self.hostname_locked() => Some(&mut self.hostname),
            EditorField::Alias => Some(&mut self.alias),
            EditorField::Tags => Some(&mut self.tags),
            _ => None,
        }
    }

    pub(crate) fn insert_char(&mut self, ch: char) {
        if let Some(text) = self.active_text_mut() {
            text.push(ch);
            self.error = None;
        }
    }

    pub(crate) fn backspace(&mut self) {
        if let Some(text) = self.active_text_mut() {
            text.pop();
            self.error = None;
        }
    }
}
