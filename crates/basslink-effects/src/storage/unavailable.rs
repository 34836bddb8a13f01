//! Storage for contexts that have none

use basslink_core::{StorageEffects, StorageError};

/// Handler for execution contexts without tab storage (server rendering,
/// CLI runs without a state directory). Every call fails with
/// [`StorageError::Unavailable`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStorageHandler;

impl UnavailableStorageHandler {
    fn error() -> StorageError {
        StorageError::Unavailable("no tab storage in this context".to_string())
    }
}

impl StorageEffects for UnavailableStorageHandler {
    fn store(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(Self::error())
    }

    fn retrieve(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(Self::error())
    }

    fn remove(&self, _key: &str) -> Result<bool, StorageError> {
        Err(Self::error())
    }
}
