//! `memory`: inspect or reset a tab's remembered redirect

use super::host::open_storage;
use basslink_core::GuardConfig;
use basslink_guard::RedirectMemory;
use clap::Subcommand;
use std::path::Path;

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum MemoryCommand {
    /// Print the remembered redirect
    Show,
    /// Forget the remembered redirect
    Clear,
}

pub fn run(
    config: &GuardConfig,
    command: MemoryCommand,
    state_dir: &Path,
    tab: &str,
) -> anyhow::Result<String> {
    let storage = open_storage(Some(state_dir), tab)?;
    let memory = RedirectMemory::new(storage.as_ref(), &config.storage_key);
    let report = match command {
        MemoryCommand::Show => memory.get().unwrap_or_else(|| "(empty)".to_string()),
        MemoryCommand::Clear => {
            memory.reset();
            "cleared".to_string()
        }
    };
    Ok(report)
}
