//! Locates and vets the external programs the launcher runs.
//!
//! Each program is looked up on `PATH` once and the outcome (path or error)
//! is cached for the rest of the process.

use once_cell::sync::OnceCell;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

#[cfg(unix)]
use std::os::unix::fs::{MetadataExt, PermissionsExt};

#[cfg(unix)]
const EXECUTE_BITS: u32 = 0o111;
#[cfg(unix)]
const WORLD_WRITABLE_BIT: u32 = 0o002;

pub(crate) const RLOGIN: &str = "rlogin";
pub(crate) const RSH: &str = "rsh";
pub(crate) const KINIT: &str = "kinit";

#[derive(Debug, Clone)]
struct CachedPathError {
    kind: io::ErrorKind,
    message: String,
}

impl CachedPathError {
    fn from_io(err: io::Error) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

type CachedPath = OnceCell<Result<PathBuf, CachedPathError>>;

static RLOGIN_PATH: CachedPath = OnceCell::new();
static RSH_PATH: CachedPath = OnceCell::new();
static KINIT_PATH: CachedPath = OnceCell::new();

fn resolve_cached(cell: &CachedPath, label: &'static str) -> io::Result<PathBuf> {
    let cached = cell.get_or_init(|| resolve_path_from_env(label).map_err(CachedPathError::from_io));
    match cached {
        Ok(path) => Ok(path.clone()),
        Err(err) => Err(io::Error::new(err.kind, format!("{label}: {}", err.message))),
    }
}

/// Resolve one of the launcher's known programs to a vetted absolute path.
pub(crate) fn resolve_known_command_path(command: &str) -> io::Result<PathBuf> {
    match command {
        RLOGIN => resolve_cached(&RLOGIN_PATH, RLOGIN),
        RSH => resolve_cached(&RSH_PATH, RSH),
        KINIT => resolve_cached(&KINIT_PATH, KINIT),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("unsupported command path lookup: {command}"),
        )),
    }
}

fn resolve_path_from_env(binary: &str) -> io::Result<PathBuf> {
    let located = which::which(binary).map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("{binary} not found in PATH: {err}")))?;
    validate_executable_path(&located, binary)
}

fn validate_executable_path(path: &Path, label: &str) -> io::Result<PathBuf> {
    let canonical = fs::canonicalize(path).map_err(|err| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("unable to canonicalize {label} path '{}': {err}", path.display()),
        )
    })?;

    let metadata = fs::metadata(&canonical).map_err(|err| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("unable to inspect {label} path '{}': {err}", canonical.display()),
        )
    })?;

    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{label} path '{}' is not a regular file", canonical.display()),
        ));
    }

    #[cfg(unix)]
    {
        validate_unix_executable_security(&canonical, &metadata, label)?;
    }

    Ok(canonical)
}

#[cfg(unix)]
fn validate_unix_executable_security(path: &Path, metadata: &fs::Metadata, label: &str) -> io::Result<()> {
    let mode = metadata.permissions().mode();
    if mode & WORLD_WRITABLE_BIT != 0 {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{label} path '{}' is world-writable", path.display()),
        ));
    }

    if mode & EXECUTE_BITS == 0 {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{label} path '{}' is not executable", path.display()),
        ));
    }

    let owner_uid = metadata.uid();
    let effective_uid = nix::unistd::Uid::effective().as_raw();
    if owner_uid != 0 && owner_uid != effective_uid {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("{label} path '{}' must be owned by root or the current user", path.display()),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "test/command_path.rs"]
mod tests;
