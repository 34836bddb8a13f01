//! In-memory tab storage

use super::check_key;
use basslink_core::{StorageEffects, StorageError};
use parking_lot::RwLock;
use std::collections::HashMap;

/// In-memory storage scoped to a single tab.
#[derive(Debug, Default)]
pub struct MemoryStorageHandler {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorageHandler {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Returns `true` if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl StorageEffects for MemoryStorageHandler {
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        check_key(key)?;
        self.data.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.data.read().get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.data.write().remove(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_retrieve_remove() {
        let storage = MemoryStorageHandler::new();
        storage.store("k", "v1").unwrap();
        storage.store("k", "v2").unwrap();
        assert_eq!(storage.retrieve("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(storage.len(), 1);
        assert!(storage.remove("k").unwrap());
        assert!(!storage.remove("k").unwrap());
        assert!(storage.is_empty());
    }

    #[test]
    fn empty_key_rejected() {
        let storage = MemoryStorageHandler::new();
        assert!(matches!(
            storage.store("", "v"),
            Err(StorageError::InvalidKey { .. })
        ));
    }
}
