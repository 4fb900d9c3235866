//! Error types for the milperks system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MilperksError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Entity already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Authentication failed: {reason}")]
    AuthenticationFailed { reason: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Update conflict: {message}")]
    Conflict { message: String },

    /// Store failure wrapped with the stable operation name, so callers
    /// can tell which operation failed without parsing message text.
    #[error("{op}: {message}")]
    Store { op: String, message: String },
}

impl MilperksError {
    pub fn validation(message: impl Into<String>) -> Self {
        MilperksError::Validation {
            message: message.into(),
        }
    }

    /// Wrap a lower-level store failure with a stable operation name.
    ///
    /// Caller errors and domain outcomes (validation, not-found,
    /// already-exists, conflict) pass through unchanged.
    pub fn wrap_store(op: &str, err: MilperksError) -> Self {
        match err {
            e @ (MilperksError::NotFound { .. }
            | MilperksError::AlreadyExists { .. }
            | MilperksError::Validation { .. }
            | MilperksError::Conflict { .. }
            | MilperksError::AuthenticationFailed { .. }) => e,
            other => MilperksError::Store {
                op: op.into(),
                message: other.to_string(),
            },
        }
    }
}

pub type MilperksResult<T> = Result<T, MilperksError>;
