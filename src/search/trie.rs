//! Prefix trie keyed by upper-cased hostname, alias and tags.

use crate::registry::{RecordId, ServerStore};
use std::collections::BTreeMap;

const ROOT: usize = 0;

#[derive(Debug, Default, Clone)]
struct TrieNode {
    children: BTreeMap<char, usize>,
    record: Option<RecordId>,
}

/// Trie over every key of every record in a [`ServerStore`].
///
/// Nodes live in a flat arena and terminal nodes hold a [`RecordId`], never a
/// copy of the record. A key produced by two records maps to whichever was
/// inserted last. The index is always rebuilt as a whole from the store.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    nodes: Vec<TrieNode>,
    indexed: Vec<RecordId>,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            indexed: Vec::new(),
        }
    }
}

impl SearchIndex {
    /// Index every record in `store`, visiting records in hostname order so
    /// key collisions resolve the same way on every build.
    pub fn build(store: &ServerStore) -> Self {
        let mut index = Self::default();

        for id in store.ids_by_hostname() {
            let Some(record) = store.record(id) else {
                continue;
            };
            index.indexed.push(id);
            index.insert(record.hostname(), id);
            if let Some(alias) = record.alias() {
                index.insert(alias, id);
            }
            for tag in record.tags() {
                index.insert(tag, id);
            }
        }

        index
    }

    fn insert(&mut self, key: &str, id: RecordId) {
        let key = normalize_key(key);
        if key.is_empty() {
            return;
        }

        let mut node = ROOT;
        for ch in key.chars() {
            node = match self.nodes[node].children.get(&ch) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node].children.insert(ch, child);
                    child
                }
            };
        }
        self.nodes[node].record = Some(id);
    }

    /// Records reachable from keys starting with `prefix` (case-insensitive).
    ///
    /// An empty prefix yields every indexed record once. Otherwise a record
    /// appears once per matching key, so callers dedup. Cost is the prefix
    /// length plus the size of the matched subtree.
    pub fn query(&self, prefix: &str) -> Vec<RecordId> {
        if prefix.is_empty() {
            return self.indexed.clone();
        }

        let Some(start) = self.find_node(&normalize_key(prefix)) else {
            return Vec::new();
        };

        let mut matches = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            let node = &self.nodes[node];
            if let Some(id) = node.record {
                matches.push(id);
            }
            stack.extend(node.children.values().rev().copied());
        }
        matches
    }

    fn find_node(&self, key: &str) -> Option<usize> {
        key.chars().try_fold(ROOT, |node, ch| self.nodes[node].children.get(&ch).copied())
    }

    /// Number of distinct keys currently mapped to a record.
    pub fn key_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.record.is_some()).count()
    }

    pub fn record_count(&self) -> usize {
        self.indexed.len()
    }
}

fn normalize_key(text: &str) -> String {
    text.to_uppercase()
}

#[cfg(test)]
#[path = "../test/search/trie.rs"]
mod tests;
