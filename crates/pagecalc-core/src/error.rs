//! Error types for pagecalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pagecalc-core
#[derive(Debug, Error)]
pub enum Error {
    /// An input field with this id already exists
    #[error("Duplicate input id: {0}")]
    DuplicateInputId(String),

    /// No input field with this id
    #[error("Unknown input: {0}")]
    UnknownInput(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
