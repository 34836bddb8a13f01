//! Single-slot "return to" storage.
//!
//! Remembers the page a denied visitor was trying to reach so the guard can
//! send them there once they sign in. The slot lives in tab storage, so it
//! survives a reload of the tab and is not shared with other tabs. Storage
//! failures are logged and otherwise treated as an empty slot.

use basslink_core::StorageEffects;
use tracing::warn;

/// Redirect slot over a tab storage backend.
///
/// The guard owns the slot; nothing else should write its key.
#[derive(Debug)]
pub struct RedirectMemory<'a, S: StorageEffects + ?Sized> {
    storage: &'a S,
    key: &'a str,
}

impl<'a, S: StorageEffects + ?Sized> RedirectMemory<'a, S> {
    /// Slot stored under `key` in `storage`.
    pub fn new(storage: &'a S, key: &'a str) -> Self {
        Self { storage, key }
    }

    /// The remembered URL, or `None` if unset or storage is unavailable.
    pub fn get(&self) -> Option<String> {
        match self.storage.retrieve(self.key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = self.key, error = %e, "redirect memory unreadable, treating as empty");
                None
            }
        }
    }

    /// Overwrite the slot. The URL is stored as given.
    pub fn set(&self, url: &str) {
        if let Err(e) = self.storage.store(self.key, url) {
            warn!(key = self.key, url, error = %e, "failed to remember redirect");
        }
    }

    /// Empty the slot. Idempotent.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(self.key) {
            warn!(key = self.key, error = %e, "failed to clear redirect memory");
        }
    }

    /// Explicit reset used by sign-out flows; same as [`clear`](Self::clear).
    pub fn reset(&self) {
        self.clear();
    }

    /// Read the slot and empty it.
    pub fn take(&self) -> Option<String> {
        let value = self.get();
        self.clear();
        value
    }
}
