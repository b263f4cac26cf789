//! Prefix search over the server registry.

mod query;
mod trie;

pub use query::{search, search_records};
pub use trie::SearchIndex;
