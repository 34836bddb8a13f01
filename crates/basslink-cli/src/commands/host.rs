//! Command-line host for the guard's collaborators

use anyhow::Context;
use basslink_core::{
    GuardConfig, Identity, LocationEffects, NavigationEffects, SessionEffects, StorageEffects,
    StorageError,
};
use basslink_effects::{FilesystemStorageHandler, MemoryStorageHandler};
use std::path::Path;

/// Load guard configuration, then apply `BASSLINK_*` overrides.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<GuardConfig> {
    let mut config = match path {
        Some(path) => GuardConfig::load_from_file(path)
            .with_context(|| format!("loading guard config {}", path.display()))?,
        None => GuardConfig::default(),
    };
    config.merge_with_env().context("applying environment overrides")?;
    Ok(config)
}

/// Tab storage for a run: durable when a state directory is given.
pub fn open_storage(
    state_dir: Option<&Path>,
    tab: &str,
) -> anyhow::Result<Box<dyn StorageEffects>> {
    match state_dir {
        Some(dir) => {
            let handler = FilesystemStorageHandler::new(dir, tab)
                .with_context(|| format!("opening storage for tab '{tab}'"))?;
            Ok(Box::new(handler))
        }
        None => Ok(Box::new(MemoryStorageHandler::new())),
    }
}

/// One simulated page visit.
pub struct CliHost {
    identity: Option<Identity>,
    path: String,
    storage: Box<dyn StorageEffects>,
}

impl CliHost {
    pub fn new(identity: Option<Identity>, path: &str, storage: Box<dyn StorageEffects>) -> Self {
        Self {
            identity,
            path: path.to_string(),
            storage,
        }
    }
}

impl SessionEffects for CliHost {
    fn current_identity(&self) -> Option<Identity> {
        self.identity.clone()
    }
}

impl LocationEffects for CliHost {
    fn current_path(&self) -> String {
        self.path.clone()
    }
}

impl NavigationEffects for CliHost {
    fn navigate(&self, path: &str) {
        tracing::info!(to = path, "navigate");
    }
}

impl StorageEffects for CliHost {
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.store(key, value)
    }

    fn retrieve(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.retrieve(key)
    }

    fn remove(&self, key: &str) -> Result<bool, StorageError> {
        self.storage.remove(key)
    }
}
