//! Config file discovery and identity list loading.
//!
//! An explicit path always wins. Without one the standard locations are
//! checked in order:
//! 1. `~/.gwkit/<file>`
//! 2. `./<file>`

use super::ConfigError;
use crate::{log_debug, log_info, log_warn};
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

pub const SERVER_CONFIG_FILE: &str = "server_config.json";
pub const USERNAME_CONFIG_FILE: &str = "username_config.json";

/// Locate a config document, returning `NotFound` with the last candidate
/// checked when nothing exists.
pub fn resolve_config_path(explicit: Option<&Path>, file_name: &str) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        log_debug!("Using explicit config path: {:?}", path);
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        log_warn!("Explicit config path does not exist: {:?}", path);
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let candidates = candidate_paths(file_name);
    for candidate in &candidates {
        log_debug!("Checking: {:?}", candidate);
        if candidate.exists() {
            log_info!("Found {} at: {:?}", file_name, candidate);
            return Ok(candidate.clone());
        }
    }

    let fallback = candidates.last().cloned().unwrap_or_else(|| PathBuf::from(file_name));
    Err(ConfigError::NotFound(fallback))
}

fn candidate_paths(file_name: &str) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(home_dir) = dirs::home_dir() {
        candidates.push(home_dir.join(".gwkit").join(file_name));
    }
    match env::current_dir() {
        Ok(current_dir) => candidates.push(current_dir.join(file_name)),
        Err(err) => {
            log_warn!("Failed to get current directory: {}", err);
            candidates.push(PathBuf::from(file_name));
        }
    }
    candidates
}

/// Read a whole document, mapping a missing file to `NotFound`.
pub fn read_document(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|err| {
        if err.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound(path.to_path_buf())
        } else {
            ConfigError::IoError(err)
        }
    })
}

/// Load the ordered list of login identities.
pub fn load_identity_list(path: &Path) -> Result<Vec<String>, ConfigError> {
    log_info!("Loading identity list from: {:?}", path);
    let content = read_document(path)?;
    parse_identity_list(path, &content)
}

fn parse_identity_list(path: &Path, content: &str) -> Result<Vec<String>, ConfigError> {
    let identities: Vec<String> = serde_json::from_str(content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    if identities.is_empty() {
        return Err(ConfigError::Parse {
            path: path.to_path_buf(),
            message: "identity list is empty".to_string(),
        });
    }

    if let Some(position) = identities.iter().position(|identity| identity.trim().is_empty()) {
        return Err(ConfigError::Parse {
            path: path.to_path_buf(),
            message: format!("identity #{} is blank", position + 1),
        });
    }

    log_debug!("Parsed {} identities", identities.len());
    Ok(identities)
}

#[cfg(test)]
#[path = "../test/config/loader.rs"]
mod tests;
