//! Configuration documents: path discovery, identity list loading and the
//! error type shared with the server registry.

mod errors;
mod loader;

pub use errors::ConfigError;
pub use loader::{SERVER_CONFIG_FILE, USERNAME_CONFIG_FILE, load_identity_list, read_document, resolve_config_path};
