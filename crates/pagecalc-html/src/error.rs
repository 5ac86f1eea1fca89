//! Markup error types

use thiserror::Error;

/// Result type for markup operations
pub type HtmlResult<T> = std::result::Result<T, HtmlError>;

/// Errors that can occur during page reading/writing
#[derive(Debug, Error)]
pub enum HtmlError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Invalid document structure
    #[error("Invalid page markup: {0}")]
    InvalidFormat(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] pagecalc_core::Error),
}
