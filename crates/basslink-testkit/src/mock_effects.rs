//! Mock host for guard tests
//!
//! [`MockEffects`] implements every guard collaborator with controllable,
//! inspectable state: the signed-in identity and current path can be changed
//! between evaluations, every navigation is logged, and tab storage can be
//! switched off to simulate a context without storage.

use basslink_core::{
    Identity, LocationEffects, NavigationEffects, RoleClass, SessionEffects, StorageEffects,
    StorageError,
};
use basslink_effects::{MemoryStorageHandler, UnavailableStorageHandler};
use parking_lot::{Mutex, RwLock};

/// Deterministic guard host for tests.
#[derive(Debug)]
pub struct MockEffects {
    identity: RwLock<Option<Identity>>,
    location: RwLock<String>,
    navigations: Mutex<Vec<String>>,
    storage: MemoryStorageHandler,
    storage_available: RwLock<bool>,
}

impl Default for MockEffects {
    fn default() -> Self {
        Self {
            identity: RwLock::new(None),
            location: RwLock::new("/".to_string()),
            navigations: Mutex::new(Vec::new()),
            storage: MemoryStorageHandler::new(),
            storage_available: RwLock::new(true),
        }
    }
}

impl MockEffects {
    /// Host with nobody signed in at `path`.
    pub fn signed_out(path: &str) -> Self {
        let effects = Self::default();
        effects.visit(path);
        effects
    }

    /// Host with a fresh identity of `role` signed in at `path`.
    pub fn signed_in(role: RoleClass, path: &str) -> Self {
        let effects = Self::signed_out(path);
        effects.sign_in(Identity::with_role(role));
        effects
    }

    /// Replace the signed-in identity.
    pub fn sign_in(&self, identity: Identity) {
        *self.identity.write() = Some(identity);
    }

    /// Drop the signed-in identity. Tab storage is left untouched.
    pub fn sign_out(&self) {
        *self.identity.write() = None;
    }

    /// Move to another path without navigating through the guard.
    pub fn visit(&self, path: &str) {
        *self.location.write() = path.to_string();
    }

    /// Follow the last navigation, as the router would.
    pub fn follow_last_navigation(&self) {
        if let Some(path) = self.last_navigation() {
            self.visit(&path);
        }
    }

    /// All navigations issued so far, oldest first.
    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().clone()
    }

    /// Most recent navigation.
    pub fn last_navigation(&self) -> Option<String> {
        self.navigations.lock().last().cloned()
    }

    /// Raw value stored under `key`, bypassing availability.
    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.retrieve(key).ok().flatten()
    }

    /// Seed tab storage directly, bypassing availability.
    pub fn seed_storage(&self, key: &str, value: &str) {
        // Empty keys are the only rejection and are a test bug.
        let _ = self.storage.store(key, value);
    }

    /// Turn tab storage on or off.
    pub fn set_storage_available(&self, available: bool) {
        *self.storage_available.write() = available;
    }

    fn storage_available(&self) -> bool {
        *self.storage_available.read()
    }
}

impl SessionEffects for MockEffects {
    fn current_identity(&self) -> Option<Identity> {
        self.identity.read().clone()
    }
}

impl LocationEffects for MockEffects {
    fn current_path(&self) -> String {
        self.location.read().clone()
    }
}

impl NavigationEffects for MockEffects {
    fn navigate(&self, path: &str) {
        self.navigations.lock().push(path.to_string());
    }
}

impl StorageEffects for MockEffects {
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.storage_available() {
            return UnavailableStorageHandler.store(key, value);
        }
        self.storage.store(key, value)
    }

    fn retrieve(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.storage_available() {
            return UnavailableStorageHandler.retrieve(key);
        }
        self.storage.retrieve(key)
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        if !self.storage_available() {
            return UnavailableStorageHandler.remove(key);
        }
        self.storage.remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_session_and_location() {
        let effects = MockEffects::signed_out("/rates");
        assert!(effects.current_identity().is_none());
        effects.sign_in(Identity::with_role(RoleClass::Agent));
        assert_eq!(
            effects.current_identity().map(|i| i.role()),
            Some(RoleClass::Agent)
        );
        effects.visit("/deals");
        assert_eq!(effects.current_path(), "/deals");
    }

    #[test]
    fn logs_navigations() {
        let effects = MockEffects::signed_out("/");
        effects.navigate("/signin");
        effects.navigate("/401");
        assert_eq!(effects.navigations(), vec!["/signin", "/401"]);
        effects.follow_last_navigation();
        assert_eq!(effects.current_path(), "/401");
    }

    #[test]
    fn storage_can_be_switched_off() {
        let effects = MockEffects::signed_out("/");
        effects.store("k", "v").unwrap();
        effects.set_storage_available(false);
        assert!(matches!(
            effects.retrieve("k"),
            Err(StorageError::Unavailable(_))
        ));
        assert_eq!(effects.stored("k").as_deref(), Some("v"));
    }
}
