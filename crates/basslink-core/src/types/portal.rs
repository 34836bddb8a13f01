//! BassLink sub-applications.

use crate::types::identity::RoleClass;
use serde::{Deserialize, Serialize};

/// One of the three BassLink front doors, each with its own sign-in page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Portal {
    /// Sender-facing application rooted at `/`
    Client,
    /// Agent application rooted at `/agent`
    Agent,
    /// Back office rooted at `/office`
    Office,
}

impl Portal {
    /// Infer the portal a pathname belongs to from its first segment.
    pub fn for_path(path: &str) -> Self {
        let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
        match first {
            "agent" => Self::Agent,
            "office" => Self::Office,
            _ => Self::Client,
        }
    }

    /// Portal serving the given role class.
    pub fn for_role(role: RoleClass) -> Self {
        match role {
            RoleClass::Client => Self::Client,
            RoleClass::Agent => Self::Agent,
            RoleClass::Admin => Self::Office,
        }
    }

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Agent => "agent",
            Self::Office => "office",
        }
    }
}

impl std::fmt::Display for Portal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
