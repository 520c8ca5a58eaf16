//! Error types for remote store operations.

use gridstore_validation::FieldErrors;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur talking to the backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network failure, timeout, or a body that could not be decoded.
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a status the operation does not expect.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// No record with this key.
    #[error("record not found: {0}")]
    NotFound(String),

    /// The backend rejected a write with field errors.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// The load request could not be interpreted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl StoreError {
    /// Whether this is a connectivity or unexpected-status failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::NotFound(_) => Some(404),
            _ => None,
        }
    }
}
