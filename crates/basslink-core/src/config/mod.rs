//! Guard configuration
//!
//! Defaults reproduce BassLink's production routing. Deployments override
//! them from a TOML file and then from `BASSLINK_*` environment variables.

use crate::types::Portal;
use crate::{BassLinkError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Storage key of the redirect slot.
pub const DEFAULT_STORAGE_KEY: &str = "basslinkRedirectUrl";

/// Path stored when a signed-in identity lacks the privilege for a route.
pub const DEFAULT_UNAUTHORIZED_PATH: &str = "/401";

/// Where a signed-in identity lands when nothing else is remembered.
pub const DEFAULT_LOGIN_REDIRECT: &str = "/";

/// Routes that never capture redirect memory. Capturing on these would send
/// a visitor back to a sign-in or error page after signing in.
pub const DEFAULT_EXEMPT_PATHS: [&str; 8] = [
    "/",
    "/callback",
    "/signin",
    "/agent/signin",
    "/office/signin",
    "/signout",
    "/logout",
    "/404",
];

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "BASSLINK_";

/// Sign-in entry point of each portal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignInPaths {
    /// Sender sign-in
    pub client: String,
    /// Agent sign-in
    pub agent: String,
    /// Back-office sign-in
    pub office: String,
}

impl Default for SignInPaths {
    fn default() -> Self {
        Self {
            client: "/signin".to_string(),
            agent: "/agent/signin".to_string(),
            office: "/office/signin".to_string(),
        }
    }
}

impl SignInPaths {
    /// Sign-in path for a portal.
    pub fn for_portal(&self, portal: Portal) -> &str {
        match portal {
            Portal::Client => &self.client,
            Portal::Agent => &self.agent,
            Portal::Office => &self.office,
        }
    }
}

/// Route guard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Storage key of the redirect slot
    pub storage_key: String,
    /// Path remembered for signed-in but under-privileged visitors
    pub unauthorized_path: String,
    /// Fallback target for signed-in visitors with nothing remembered
    pub default_login_redirect: String,
    /// Paths that never capture redirect memory
    pub exempt_paths: BTreeSet<String>,
    /// Sign-in entry points
    pub sign_in: SignInPaths,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            unauthorized_path: DEFAULT_UNAUTHORIZED_PATH.to_string(),
            default_login_redirect: DEFAULT_LOGIN_REDIRECT.to_string(),
            exempt_paths: DEFAULT_EXEMPT_PATHS.iter().map(|p| p.to_string()).collect(),
            sign_in: SignInPaths::default(),
        }
    }
}

impl GuardConfig {
    /// Load configuration from a TOML file. Missing keys keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BassLinkError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `BASSLINK_*` overrides from the process environment.
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_with_vars(std::env::vars())
    }

    /// Apply `BASSLINK_*` overrides from the given variables.
    ///
    /// Unknown `BASSLINK_*` keys are ignored.
    pub fn merge_with_vars<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            match name {
                "STORAGE_KEY" => self.storage_key = value,
                "UNAUTHORIZED_PATH" => self.unauthorized_path = value,
                "DEFAULT_LOGIN_REDIRECT" => self.default_login_redirect = value,
                "EXEMPT_PATHS" => {
                    self.exempt_paths = value
                        .split(',')
                        .map(str::trim)
                        .filter(|p| !p.is_empty())
                        .map(str::to_string)
                        .collect();
                }
                "SIGN_IN_CLIENT" => self.sign_in.client = value,
                "SIGN_IN_AGENT" => self.sign_in.agent = value,
                "SIGN_IN_OFFICE" => self.sign_in.office = value,
                _ => {}
            }
        }
        self.validate()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.storage_key.is_empty() {
            return Err(BassLinkError::config("storage_key must not be empty"));
        }
        check_path("unauthorized_path", &self.unauthorized_path)?;
        check_path("default_login_redirect", &self.default_login_redirect)?;
        check_path("sign_in.client", &self.sign_in.client)?;
        check_path("sign_in.agent", &self.sign_in.agent)?;
        check_path("sign_in.office", &self.sign_in.office)?;
        for path in &self.exempt_paths {
            check_path("exempt_paths", path)?;
        }
        Ok(())
    }

    /// Returns `true` if visiting `path` must not capture redirect memory.
    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_paths.contains(path)
    }

    /// Sign-in entry point for a portal.
    pub fn sign_in_path(&self, portal: Portal) -> &str {
        self.sign_in.for_portal(portal)
    }
}

fn check_path(field: &str, path: &str) -> Result<()> {
    if path.starts_with('/') {
        Ok(())
    } else {
        Err(BassLinkError::config(format!(
            "{field} must be an absolute path, got '{path}'"
        )))
    }
}
