//! Tab-scoped key/value storage interface

use crate::BassLinkError;

/// Storage operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage exists in this execution context
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Failed to read a value
    #[error("Failed to read: {0}")]
    ReadFailed(String),

    /// Failed to write a value
    #[error("Failed to write: {0}")]
    WriteFailed(String),

    /// Failed to delete a value
    #[error("Failed to delete: {0}")]
    DeleteFailed(String),

    /// Key rejected by the backend
    #[error("Invalid key: {reason}")]
    InvalidKey {
        /// Why the key was rejected
        reason: String,
    },
}

impl From<StorageError> for BassLinkError {
    fn from(err: StorageError) -> Self {
        BassLinkError::storage(err.to_string())
    }
}

/// Per-tab durable string storage.
///
/// Mirrors a browser tab's session storage: values survive a reload of the
/// same tab but are not shared with other tabs.
pub trait StorageEffects: Send + Sync {
    /// Store a value under a key, replacing any previous value.
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Retrieve the value stored under a key.
    fn retrieve(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Remove a key. Returns whether a value was present.
    fn remove(&self, key: &str) -> Result<bool, StorageError>;
}
