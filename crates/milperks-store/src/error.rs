//! Store-specific error types and conversions.

use milperks_core::error::MilperksError;

/// Store-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },

    #[error("Record already exists: {entity}")]
    AlreadyExists { entity: String },

    #[error("Store poisoned: {0}")]
    Poisoned(String),
}

impl From<StoreError> for MilperksError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => MilperksError::NotFound { entity, id },
            StoreError::AlreadyExists { entity } => MilperksError::AlreadyExists { entity },
            other => MilperksError::Store {
                op: "Store access failed".into(),
                message: other.to_string(),
            },
        }
    }
}
