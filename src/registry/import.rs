//! Plain hosts-listing import.
//!
//! Each non-blank line is `hostname [tag ...]`; `#` starts a comment line.

use super::errors::ValidationError;
use super::store::ServerStore;
use crate::log_debug;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportedHost {
    pub hostname: String,
    pub tags: Vec<String>,
}

pub fn parse_hosts_listing(content: &str) -> Vec<ImportedHost> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let hostname = fields.next()?.to_string();
            Some(ImportedHost {
                hostname,
                tags: fields.map(str::to_string).collect(),
            })
        })
        .collect()
}

/// Merge a hosts listing into `store`.
///
/// Tags come from the listing; an alias already set on an existing record is
/// kept. A hostname listed more than once takes its last line's tags. Returns
/// the number of distinct hosts imported.
pub fn import_hosts(store: &mut ServerStore, content: &str) -> Result<usize, ValidationError> {
    let hosts = parse_hosts_listing(content);
    let mut imported = BTreeSet::new();
    for host in &hosts {
        let alias = store.get(&host.hostname).and_then(|record| record.alias()).map(str::to_string);
        store.upsert(&host.hostname, alias.as_deref(), host.tags.clone())?;
        log_debug!("Imported {} with {} tag(s)", host.hostname, host.tags.len());
        imported.insert(host.hostname.as_str());
    }
    Ok(imported.len())
}

#[cfg(test)]
#[path = "../test/registry/import.rs"]
mod tests;
