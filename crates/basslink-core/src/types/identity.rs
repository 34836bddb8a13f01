//! Signed-in principals and their role classes.

use crate::BassLinkError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Tenant type of a signed-in principal.
///
/// BassLink recognizes three fixed classes: senders (`client`), payment
/// processors (`agent`) and back-office staff (`admin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleClass {
    /// Remittance sender
    Client,
    /// Payment processor
    Agent,
    /// Back-office administrator
    Admin,
}

impl RoleClass {
    /// All role classes, in declaration order.
    pub const ALL: [RoleClass; 3] = [RoleClass::Client, RoleClass::Agent, RoleClass::Admin];

    /// Wire name of the role class.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Agent => "agent",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for RoleClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleClass {
    type Err = BassLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Self::Client),
            "agent" => Ok(Self::Agent),
            "admin" => Ok(Self::Admin),
            other => Err(BassLinkError::invalid(format!("unknown role class '{other}'"))),
        }
    }
}

/// Opaque reference to the full user record held by the session provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRef(Uuid);

impl UserRef {
    /// Create a fresh random reference.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing record id.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Underlying record id.
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for UserRef {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user-{}", self.0)
    }
}

/// The authenticated principal.
///
/// Created by the session provider on sign-in and dropped on sign-out; the
/// guard only ever reads it. Absence of an identity is modelled as
/// `Option<Identity>::None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    role: RoleClass,
    user: UserRef,
}

impl Identity {
    /// Create an identity for the given role class and user record.
    pub fn new(role: RoleClass, user: UserRef) -> Self {
        Self { role, user }
    }

    /// Identity with a fresh user reference.
    pub fn with_role(role: RoleClass) -> Self {
        Self::new(role, UserRef::new())
    }

    /// Role class of this principal.
    pub fn role(&self) -> RoleClass {
        self.role
    }

    /// Reference to the full user record.
    pub fn user(&self) -> UserRef {
        self.user
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.user, self.role)
    }
}
