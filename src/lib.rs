pub mod args;
mod command_path;
pub mod config;
pub mod log;
pub mod process;
pub mod registry;
pub mod search;
pub mod session;
pub mod tui;

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Config(config::ConfigError),
    Validation(registry::ValidationError),
    Session(session::SessionError),
    Log(log::LogError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(err) => write!(f, "Configuration error: {}", err),
            Error::Validation(err) => write!(f, "Validation error: {}", err),
            Error::Session(err) => write!(f, "Session error: {}", err),
            Error::Log(err) => write!(f, "Logging error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(err) => Some(err),
            Error::Validation(err) => Some(err),
            Error::Session(err) => Some(err),
            Error::Log(err) => Some(err),
        }
    }
}

// Implement From for each error type
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err)
    }
}

impl From<registry::ValidationError> for Error {
    fn from(err: registry::ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<session::SessionError> for Error {
    fn from(err: session::SessionError) -> Self {
        Error::Session(err)
    }
}

impl From<log::LogError> for Error {
    fn from(err: log::LogError) -> Self {
        Error::Log(err)
    }
}
