//! Error types for request and response shaping.

use thiserror::Error;

/// Errors raised while interpreting grid requests or list responses.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A filter leaf could not be read as `[field, operator, value]`.
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    /// A list response was a scalar or held a non-object record.
    #[error("invalid list response: {0}")]
    InvalidResponse(String),
}

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
