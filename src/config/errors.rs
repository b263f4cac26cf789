use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ConfigError {
    /// The document does not exist at any searched location.
    NotFound(PathBuf),
    /// The document exists but is not a valid document of the expected shape.
    Parse { path: PathBuf, message: String },
    /// Persisting a document failed.
    Write { path: PathBuf, source: io::Error },
    IoError(io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotFound(path) => write!(f, "config file not found: {}", path.display()),
            ConfigError::Parse { path, message } => write!(f, "failed to parse {}: {}", path.display(), message),
            ConfigError::Write { path, source } => write!(f, "failed to write {}: {}", path.display(), source),
            ConfigError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Write { source, .. } => Some(source),
            ConfigError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::IoError(error)
    }
}
