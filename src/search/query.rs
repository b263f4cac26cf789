//! Keyword search: trie lookup, dedup and display-name ordering.

use super::trie::SearchIndex;
use crate::registry::{RecordId, ServerRecord, ServerStore};
use std::collections::HashSet;

/// Records matching `keyword`, each once, ordered by display name.
///
/// The sort is stable and case-sensitive. An empty keyword returns the whole
/// registry; a keyword with no match returns an empty list.
pub fn search(index: &SearchIndex, store: &ServerStore, keyword: &str) -> Vec<RecordId> {
    let mut seen = HashSet::new();
    let mut ids: Vec<RecordId> = index
        .query(keyword)
        .into_iter()
        .filter(|id| store.record(*id).is_some() && seen.insert(*id))
        .collect();

    ids.sort_by(|a, b| display_name(store, *a).cmp(display_name(store, *b)));
    ids
}

/// Same as [`search`], resolved to record references.
pub fn search_records<'a>(index: &SearchIndex, store: &'a ServerStore, keyword: &str) -> Vec<&'a ServerRecord> {
    search(index, store, keyword).into_iter().filter_map(|id| store.record(id)).collect()
}

fn display_name(store: &ServerStore, id: RecordId) -> &str {
    store.record(id).map(ServerRecord::display_name).unwrap_or_default()
}

#[cfg(test)]
#[path = "../test/search/query.rs"]
mod tests;
