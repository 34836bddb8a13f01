//! Route declarations and the route table.

use basslink_core::{AccessRequirement, BassLinkError, GuardConfig, Portal, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A protected route: its path, who may view it, and where its visitors go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDeclaration {
    /// Route path, e.g. `/office/rates`
    pub path: String,
    /// Access requirement, fixed at definition time
    #[serde(default)]
    pub auth: AccessRequirement,
    /// Owning portal; inferred from `auth`, then the path, when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portal: Option<Portal>,
    /// Where signed-in visitors go when denied with nothing remembered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_redirect_url: Option<String>,
}

impl RouteDeclaration {
    /// Declare a route.
    pub fn new(path: impl Into<String>, auth: AccessRequirement) -> Self {
        Self {
            path: path.into(),
            auth,
            portal: None,
            login_redirect_url: None,
        }
    }

    /// Pin the owning portal.
    pub fn with_portal(mut self, portal: Portal) -> Self {
        self.portal = Some(portal);
        self
    }

    /// Set the fallback target for denied signed-in visitors.
    pub fn with_login_redirect(mut self, url: impl Into<String>) -> Self {
        self.login_redirect_url = Some(url.into());
        self
    }

    /// Access requirement of this route.
    pub fn auth(&self) -> &AccessRequirement {
        &self.auth
    }

    /// Declared portal, else the portal of the one role class `auth` names,
    /// else the one implied by the path.
    pub fn portal(&self) -> Portal {
        self.portal
            .or_else(|| self.auth.intended_role().map(Portal::for_role))
            .unwrap_or_else(|| Portal::for_path(&self.path))
    }

    /// Declared login redirect, or the configured default.
    pub fn login_redirect_url<'a>(&'a self, config: &'a GuardConfig) -> &'a str {
        self.login_redirect_url
            .as_deref()
            .unwrap_or(&config.default_login_redirect)
    }

    fn validate(&self) -> Result<()> {
        if !self.path.starts_with('/') {
            return Err(BassLinkError::invalid(format!(
                "route path '{}' must start with '/'",
                self.path
            )));
        }
        if let Some(url) = &self.login_redirect_url {
            if !url.starts_with('/') {
                return Err(BassLinkError::invalid(format!(
                    "login_redirect_url '{url}' of route '{}' must start with '/'",
                    self.path
                )));
            }
        }
        Ok(())
    }

    /// Whether this declaration covers `path` as a parent route.
    ///
    /// The root route only ever matches itself.
    fn covers(&self, path: &str) -> bool {
        if self.path == "/" {
            return false;
        }
        let prefix = self.path.trim_end_matches('/');
        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

#[derive(Deserialize)]
struct RouteTableFile {
    #[serde(default)]
    routes: Vec<RouteDeclaration>,
}

/// All declared routes of a deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: BTreeMap<String, RouteDeclaration>,
}

impl RouteTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table, rejecting invalid or duplicate paths.
    pub fn from_routes(routes: impl IntoIterator<Item = RouteDeclaration>) -> Result<Self> {
        let mut table = Self::new();
        for route in routes {
            table.insert(route)?;
        }
        Ok(table)
    }

    /// Load a table from a TOML file of `[[routes]]` entries.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            BassLinkError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse a table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: RouteTableFile = toml::from_str(content)?;
        Self::from_routes(file.routes)
    }

    /// Add a declaration.
    pub fn insert(&mut self, route: RouteDeclaration) -> Result<()> {
        route.validate()?;
        if self.routes.contains_key(&route.path) {
            return Err(BassLinkError::invalid(format!(
                "route '{}' declared twice",
                route.path
            )));
        }
        self.routes.insert(route.path.clone(), route);
        Ok(())
    }

    /// Declaration governing `path`: the exact route, else the longest
    /// parent route ending on a segment boundary.
    pub fn resolve(&self, path: &str) -> Option<&RouteDeclaration> {
        if let Some(route) = self.routes.get(path) {
            return Some(route);
        }
        self.routes
            .values()
            .filter(|route| route.covers(path))
            .max_by_key(|route| route.path.len())
    }

    /// Declaration for `path`, or an unrestricted one for undeclared paths.
    pub fn declaration_for(&self, path: &str) -> RouteDeclaration {
        self.resolve(path)
            .cloned()
            .unwrap_or_else(|| RouteDeclaration::new(path, AccessRequirement::Unset))
    }

    /// Number of declared routes
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes are declared
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Declared routes in path order
    pub fn iter(&self) -> impl Iterator<Item = &RouteDeclaration> {
        self.routes.values()
    }
}
