//! Server record model.

/// Stable slot handle into [`ServerStore`](super::ServerStore). Slots are never
/// reused or removed, so a handle stays valid for the lifetime of the store.
pub type RecordId = usize;

/// One server entry.
///
/// The hostname is the storage key and cannot change after creation; alias
/// and tags are replaced wholesale through the store's upsert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerRecord {
    hostname: String,
    alias: Option<String>,
    tags: Vec<String>,
}

impl ServerRecord {
    pub(crate) fn new(hostname: String, alias: Option<&str>, tags: Vec<String>) -> Self {
        let mut record = Self {
            hostname,
            alias: None,
            tags: Vec::new(),
        };
        record.replace_details(alias, tags);
        record
    }

    pub(crate) fn replace_details(&mut self, alias: Option<&str>, tags: Vec<String>) {
        self.alias = alias.map(str::trim).filter(|alias| !alias.is_empty()).map(str::to_string);
        self.tags = tags
            .into_iter()
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Alias when set, hostname otherwise.
    pub fn display_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.hostname)
    }

    /// Tags joined by a single space, the form used by the edit form.
    pub fn tags_text(&self) -> String {
        self.tags.join(" ")
    }

    /// Tags joined by `", "` for the list column.
    pub fn tags_legacy_text(&self) -> String {
        self.tags.join(", ")
    }
}

/// Split whitespace-separated tag text into a tag list.
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
#[path = "../test/registry/model.rs"]
mod tests;
