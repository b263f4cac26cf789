use std::error::Error;
use std::fmt;

/// Rejected create/edit submissions. Nothing is mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyHostname,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyHostname => write!(f, "Hostname is required"),
        }
    }
}

impl Error for ValidationError {}
