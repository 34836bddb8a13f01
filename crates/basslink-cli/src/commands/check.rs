//! `check`: evaluate one navigation

use super::host::{open_storage, CliHost};
use anyhow::Context;
use basslink_core::{GuardConfig, Identity, RoleClass};
use basslink_guard::{GuardOutcome, RouteGuard, RouteTable};
use std::path::Path;
use std::sync::Arc;

pub fn run(
    config: &GuardConfig,
    routes: &Path,
    path: &str,
    role: Option<RoleClass>,
    state_dir: Option<&Path>,
    tab: &str,
) -> anyhow::Result<GuardOutcome> {
    let table = RouteTable::load_from_file(routes)
        .with_context(|| format!("loading route table {}", routes.display()))?;
    let declaration = table.declaration_for(path);
    tracing::debug!(route = %declaration.path, auth = %declaration.auth, "resolved route");

    let storage = open_storage(state_dir, tab)?;
    let host = CliHost::new(role.map(Identity::with_role), path, storage);
    let mut guard = RouteGuard::new(declaration, Arc::new(config.clone()));
    Ok(guard.evaluate_with_outcome(&host))
}

#[cfg(test)]
mod tests {
    use super::*;
    use basslink_guard::Denial;

    const ROUTES: &str = r#"
        [[routes]]
        path = "/rates"
        auth = "admin"
    "#;

    fn routes_file(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("routes.toml");
        std::fs::write(&path, ROUTES).unwrap();
        path
    }

    #[test]
    fn signed_out_check_persists_memory_in_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let routes = routes_file(dir.path());
        let config = GuardConfig::default();

        let outcome = run(&config, &routes, "/rates", None, Some(dir.path()), "tab-1").unwrap();

        assert_eq!(outcome.denial, Some(Denial::SignedOut));
        assert_eq!(outcome.navigate_to.as_deref(), Some("/office/signin"));
        let report = crate::commands::memory::run(
            &config,
            crate::commands::memory::MemoryCommand::Show,
            dir.path(),
            "tab-1",
        )
        .unwrap();
        assert_eq!(report, "/rates");
    }

    #[test]
    fn admin_check_is_granted() {
        let dir = tempfile::tempdir().unwrap();
        let routes = routes_file(dir.path());

        let outcome = run(
            &GuardConfig::default(),
            &routes,
            "/rates",
            Some(RoleClass::Admin),
            None,
            "default",
        )
        .unwrap();

        assert!(outcome.granted);
        assert_eq!(outcome.navigate_to, None);
    }

    #[test]
    fn missing_route_table_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(
            &GuardConfig::default(),
            &dir.path().join("missing.toml"),
            "/rates",
            None,
            None,
            "default",
        )
        .unwrap_err();
        assert!(err.to_string().contains("route table"));
    }
}
