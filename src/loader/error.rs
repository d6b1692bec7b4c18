//! Load failure taxonomy
//!
//! Every way the quote document can fail to arrive collapses into one of
//! these variants. The TUI renders the message in the card area and keeps
//! quote-dependent actions disabled; there is no automatic retry.

use std::fmt;

/// Errors that can occur while loading the quote document
#[derive(Debug, Clone)]
pub enum LoadError {
    /// Connection-level failure (DNS, refused, reset, timeout)
    Network(String),
    /// The server answered with a non-success status
    Status(u16),
    /// The body arrived but is not a valid quote document
    Parse(String),
    /// A cached document exists but no longer parses
    CacheCorrupt(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Network(msg) => write!(f, "network error: {msg}"),
            LoadError::Status(code) => write!(f, "server returned HTTP {code}"),
            LoadError::Parse(msg) => write!(f, "malformed quote document: {msg}"),
            LoadError::CacheCorrupt(msg) => write!(f, "corrupt cache entry: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl LoadError {
    /// Short message for the TUI error card
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Network(_) => {
                "Could not reach the quote source. Check your connection and press r to retry."
                    .to_string()
            }
            LoadError::Status(code) => {
                format!("The quote source answered with HTTP {code}. Press r to retry.")
            }
            LoadError::Parse(_) | LoadError::CacheCorrupt(_) => {
                "The quote data could not be read. Press r to retry.".to_string()
            }
        }
    }
}
