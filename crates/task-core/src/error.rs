//! Error Types
//!
//! Only the storage boundary can fail; collection mutations are total.

use thiserror::Error;

/// Failures reported by a key-value storage backend
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backend could not be obtained at all (no window, storage disabled)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read '{key}': {reason}")]
    Read { key: String, reason: String },
    /// Includes quota exhaustion
    #[error("failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// Errors surfaced by [`crate::TaskStore`] persistence operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("persisted data under '{key}' is malformed: {source}")]
    MalformedData {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
