//! Keyword text and login identity for the running launcher.

use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The identity list has no entries to rotate through.
    NoIdentities,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoIdentities => write!(f, "At least one login identity is required"),
        }
    }
}

impl Error for SessionError {}

/// The search keyword being typed and the identity used for login actions.
///
/// Identities rotate round-robin over a fixed, non-empty list. Nothing here is
/// persisted.
#[derive(Debug, Clone)]
pub struct SessionState {
    keyword: String,
    identities: Vec<String>,
    identity_index: usize,
}

impl SessionState {
    pub fn new(identities: Vec<String>) -> Result<Self, SessionError> {
        if identities.is_empty() {
            return Err(SessionError::NoIdentities);
        }
        Ok(Self {
            keyword: String::new(),
            identities,
            identity_index: 0,
        })
    }

    /// Append one character to the keyword. Only alphanumeric characters are
    /// accepted; returns whether the keyword changed.
    pub fn append(&mut self, ch: char) -> bool {
        if !ch.is_alphanumeric() {
            return false;
        }
        self.keyword.push(ch);
        true
    }

    /// Remove the last keyword character. Returns `false` when already empty.
    pub fn delete_last(&mut self) -> bool {
        self.keyword.pop().is_some()
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.keyword.is_empty();
        self.keyword.clear();
        changed
    }

    /// Advance to the next identity, wrapping back to the first.
    pub fn rotate_identity(&mut self) -> &str {
        self.identity_index = (self.identity_index + 1) % self.identities.len();
        self.identity()
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn identity(&self) -> &str {
        &self.identities[self.identity_index]
    }

    pub fn identities(&self) -> &[String] {
        &self.identities
    }
}

#[cfg(test)]
#[path = "test/session.rs"]
mod tests;
