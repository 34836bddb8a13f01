//! Filesystem-backed tab storage
//!
//! Each tab owns one JSON object file under the base directory. Values
//! survive a reload of the same tab (a new handler for the same tab id) and
//! are invisible to other tabs.

use super::check_key;
use basslink_core::{StorageEffects, StorageError};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Durable per-tab storage backed by a JSON file.
#[derive(Debug)]
pub struct FilesystemStorageHandler {
    file_path: PathBuf,
    /// Serializes read-modify-write cycles through this handler
    write_lock: Mutex<()>,
}

impl FilesystemStorageHandler {
    /// Storage for `tab_id` under `base_path`.
    pub fn new(base_path: impl Into<PathBuf>, tab_id: &str) -> Result<Self, StorageError> {
        if tab_id.is_empty() || tab_id.contains(['/', '\\']) || tab_id.starts_with('.') {
            return Err(StorageError::InvalidKey {
                reason: format!("tab id '{tab_id}' is not a plain file name"),
            });
        }
        let file_path = base_path.into().join(format!("{tab_id}.json"));
        Ok(Self {
            file_path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(StorageError::ReadFailed(format!(
                    "Failed to read {}: {e}",
                    self.file_path.display()
                )))
            }
        };
        serde_json::from_str(&content).map_err(|e| {
            StorageError::ReadFailed(format!(
                "Corrupt tab storage {}: {e}",
                self.file_path.display()
            ))
        })
    }

    fn save(&self, data: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::WriteFailed(format!("Failed to create directory: {e}"))
            })?;
        }
        let content = serde_json::to_string_pretty(data)
            .map_err(|e| StorageError::WriteFailed(format!("Failed to encode: {e}")))?;

        // Replaced atomically; readers never see a partial file. Each write
        // stages under its own name so concurrent writers never share one.
        let tmp_path = self
            .file_path
            .with_extension(format!("json.{}.tmp", Uuid::new_v4().simple()));
        if let Err(e) = std::fs::write(&tmp_path, content) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(StorageError::WriteFailed(format!("Failed to write file: {e}")));
        }
        if let Err(e) = std::fs::rename(&tmp_path, &self.file_path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(StorageError::WriteFailed(format!(
                "Failed to replace file: {e}"
            )));
        }
        Ok(())
    }
}

impl StorageEffects for FilesystemStorageHandler {
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        check_key(key)?;
        let _guard = self.write_lock.lock();
        let mut data = self.load()?;
        data.insert(key.to_string(), value.to_string());
        self.save(&data)
    }

    fn retrieve(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        let _guard = self.write_lock.lock();
        let mut data = self.load()?;
        let existed = data.remove(key).is_some();
        if existed {
            self.save(&data)
                .map_err(|e| StorageError::DeleteFailed(e.to_string()))?;
        }
        tracing::trace!(key, existed, path = %self.file_path.display(), "tab storage remove");
        Ok(existed)
    }
}
