//! Expression error types

use thiserror::Error;

/// Result type for expression operations
pub type ExprResult<T> = std::result::Result<T, ExprError>;

/// Errors that can occur during expression parsing or evaluation
#[derive(Debug, Error)]
pub enum ExprError {
    /// Expression parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Variable does not resolve to an input field
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),

    /// Bound input field has no numeric value
    #[error("Input '{0}' has no numeric value")]
    NotNumeric(String),
}
