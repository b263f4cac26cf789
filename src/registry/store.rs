//! The authoritative hostname -> record mapping.

use super::document::{self, ParsedEntry};
use super::errors::ValidationError;
use super::model::{RecordId, ServerRecord};
use crate::config::{ConfigError, read_document};
use crate::{log_debug, log_info, log_warn};
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

/// Owns every [`ServerRecord`] in an append-only slot arena.
///
/// The search index refers to records by [`RecordId`] only, so rebuilding the
/// index after an upsert never observes a stale copy.
#[derive(Debug, Default, Clone)]
pub struct ServerStore {
    records: Vec<ServerRecord>,
    slots: HashMap<String, RecordId>,
}

impl ServerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the registry document at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        log_info!("Loading server registry from: {:?}", path);
        let content = read_document(path)?;
        let store = Self::parse(path, &content)?;
        log_debug!("Loaded {} servers", store.len());
        Ok(store)
    }

    /// Parse document text. `path` is only used for error reporting.
    pub fn parse(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let entries = document::parse_document(content).map_err(|message| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        })?;

        let mut store = Self::new();
        for ParsedEntry { hostname, alias, tags } in entries {
            if store.slots.contains_key(&hostname) {
                log_warn!("Duplicate hostname '{}' in {:?}, keeping the later entry", hostname, path);
            }
            store.insert_or_replace(hostname, alias.as_deref(), tags);
        }
        Ok(store)
    }

    /// Insert a record or replace the alias and tags of an existing one.
    ///
    /// Alias and tags are replaced, never merged. An empty hostname is
    /// rejected without touching the store.
    pub fn upsert(&mut self, hostname: &str, alias: Option<&str>, tags: Vec<String>) -> Result<RecordId, ValidationError> {
        let hostname = hostname.trim();
        if hostname.is_empty() {
            return Err(ValidationError::EmptyHostname);
        }
        Ok(self.insert_or_replace(hostname.to_string(), alias, tags))
    }

    fn insert_or_replace(&mut self, hostname: String, alias: Option<&str>, tags: Vec<String>) -> RecordId {
        if let Some(&id) = self.slots.get(&hostname) {
            self.records[id].replace_details(alias, tags);
            return id;
        }

        let id = self.records.len();
        self.records.push(ServerRecord::new(hostname.clone(), alias, tags));
        self.slots.insert(hostname, id);
        id
    }

    /// Write every record to `path` in canonical form.
    ///
    /// The document is written to a sibling temp file first and renamed over
    /// the target so a failed write never truncates the existing registry.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.render().map_err(|err| ConfigError::Write {
            path: path.to_path_buf(),
            source: io::Error::other(err),
        })?;

        let temp_path = temp_path_for(path);
        let write_result = fs::write(&temp_path, content.as_bytes()).and_then(|()| fs::rename(&temp_path, path));
        if let Err(source) = write_result {
            let _ = fs::remove_file(&temp_path);
            return Err(ConfigError::Write {
                path: path.to_path_buf(),
                source,
            });
        }

        log_debug!("Saved {} servers to {:?}", self.len(), path);
        Ok(())
    }

    /// Canonical document text for the current contents.
    pub fn render(&self) -> serde_json::Result<String> {
        document::render_document(self.ids_by_hostname().into_iter().map(|id| &self.records[id]))
    }

    /// Every record, in no particular order.
    pub fn get_all(&self) -> Vec<&ServerRecord> {
        self.records.iter().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &ServerRecord)> {
        self.records.iter().enumerate()
    }

    /// Record ids ordered by hostname.
    pub fn ids_by_hostname(&self) -> Vec<RecordId> {
        let mut ids: Vec<RecordId> = (0..self.records.len()).collect();
        ids.sort_by(|a, b| self.records[*a].hostname().cmp(self.records[*b].hostname()));
        ids
    }

    pub fn get(&self, hostname: &str) -> Option<&ServerRecord> {
        self.id_of(hostname).and_then(|id| self.record(id))
    }

    pub fn id_of(&self, hostname: &str) -> Option<RecordId> {
        self.slots.get(hostname).copied()
    }

    pub fn record(&self, id: RecordId) -> Option<&ServerRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut file_name = path.file_name().map(|name| name.to_os_string()).unwrap_or_else(|| "registry".into());
    file_name.push(".tmp");
    path.with_file_name(file_name)
}

#[cfg(test)]
#[path = "../test/registry/store.rs"]
mod tests;
