//! Server registry: record model, JSON document codec and the owning store.

mod document;
mod errors;
mod import;
mod model;
mod store;

pub use errors::ValidationError;
pub use import::{ImportedHost, import_hosts, parse_hosts_listing};
pub use model::{RecordId, ServerRecord, parse_tags};
pub use store::ServerStore;
