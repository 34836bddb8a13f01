//! Tab storage handlers
//!
//! - [`MemoryStorageHandler`]: lives as long as the handler (one tab, no reloads)
//! - [`FilesystemStorageHandler`]: one JSON file per tab, survives reloads
//! - [`UnavailableStorageHandler`]: execution contexts without tab storage

mod filesystem;
mod memory;
mod unavailable;

pub use filesystem::FilesystemStorageHandler;
pub use memory::MemoryStorageHandler;
pub use unavailable::UnavailableStorageHandler;

use basslink_core::StorageError;

pub(crate) fn check_key(key: &str) -> Result<(), StorageError> {
    if key.is_empty() {
        return Err(StorageError::InvalidKey {
            reason: "Key cannot be empty".to_string(),
        });
    }
    Ok(())
}
