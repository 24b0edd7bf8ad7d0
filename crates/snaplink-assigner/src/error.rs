use snaplink_core::{CoreError, StorageError};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AssignError {
    /// Malformed or missing input. User-correctable.
    #[error("{0}")]
    Validation(String),
    /// The requested short code is already taken. Recoverable by
    /// resubmitting with a different code, or none at all.
    #[error("short code already exists: {0}")]
    Conflict(String),
    /// The storage collaborator failed. Not retried here; retry policy
    /// belongs to the caller.
    #[error("storage error: {0}")]
    Storage(StorageError),
}

impl From<CoreError> for AssignError {
    fn from(value: CoreError) -> Self {
        match value {
            CoreError::InvalidShortCode(message) => Self::Validation(message),
        }
    }
}

impl From<StorageError> for AssignError {
    fn from(value: StorageError) -> Self {
        match value {
            StorageError::Conflict(code) => Self::Conflict(code),
            other => Self::Storage(other),
        }
    }
}
