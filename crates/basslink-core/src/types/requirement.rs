//! Route access requirements.
//!
//! Route tables declare access with a loose `auth` value (`null`, a boolean,
//! a role name or a list of role names). [`AccessRequirement`] closes that
//! shape into a sum type once, at route-definition time, so evaluation never
//! has to sniff runtime types.

use crate::types::identity::RoleClass;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Role name that matches the absence of an identity.
pub const GUEST_ROLE: &str = "guest";

/// What a route demands of the current identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccessRequirement {
    /// No declaration at all; behaves like [`AccessRequirement::Unrestricted`].
    #[default]
    Unset,
    /// Anyone may view the route, signed in or not.
    Unrestricted,
    /// Any signed-in identity (`auth: true`).
    AuthenticatedOnly,
    /// Only visitors without an identity (`auth: false`).
    GuestOnly,
    /// A single named role class, or `"guest"` for signed-out visitors.
    SingleRole(String),
    /// Any of the listed roles; an empty list is unrestricted.
    AnyOfRoles(Vec<String>),
    /// A declaration of unrecognized shape. Never grants access.
    Malformed(Value),
}

impl AccessRequirement {
    /// Requirement for a single role name.
    pub fn role(role: impl Into<String>) -> Self {
        Self::SingleRole(role.into())
    }

    /// Requirement for any of the given role names.
    pub fn any_of<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOfRoles(roles.into_iter().map(Into::into).collect())
    }

    /// Close a loose `auth` declaration into a requirement.
    ///
    /// Array entries that are not strings keep their JSON text so they can
    /// never equal a role name but still count toward the list length.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Unset,
            Value::Bool(true) => Self::AuthenticatedOnly,
            Value::Bool(false) => Self::GuestOnly,
            Value::String(role) => Self::SingleRole(role.clone()),
            Value::Array(entries) => Self::AnyOfRoles(
                entries
                    .iter()
                    .map(|entry| match entry {
                        Value::String(role) => role.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            other => Self::Malformed(other.clone()),
        }
    }

    /// Loose `auth` value equivalent to this requirement.
    ///
    /// Lossy for role lists parsed from non-string entries: `[1]` closes to
    /// `["1"]` and serializes back as `["1"]`.
    pub fn to_value(&self) -> Value {
        match self {
            Self::Unset | Self::Unrestricted => Value::Null,
            Self::AuthenticatedOnly => Value::Bool(true),
            Self::GuestOnly => Value::Bool(false),
            Self::SingleRole(role) => Value::String(role.clone()),
            Self::AnyOfRoles(roles) => {
                Value::Array(roles.iter().cloned().map(Value::String).collect())
            }
            Self::Malformed(value) => value.clone(),
        }
    }

    /// Role class this requirement is written for, if it names exactly one.
    ///
    /// A single role, or a one-entry role list, naming `client`, `agent` or
    /// `admin`. Guest declarations and multi-role lists name no class.
    pub fn intended_role(&self) -> Option<RoleClass> {
        match self {
            Self::SingleRole(role) => role.parse().ok(),
            Self::AnyOfRoles(roles) => match roles.as_slice() {
                [role] => role.parse().ok(),
                _ => None,
            },
            _ => None,
        }
    }

    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::Unrestricted => "unrestricted",
            Self::AuthenticatedOnly => "authenticated",
            Self::GuestOnly => "guest-only",
            Self::SingleRole(_) => "single-role",
            Self::AnyOfRoles(_) => "any-of-roles",
            Self::Malformed(_) => "malformed",
        }
    }
}

impl std::fmt::Display for AccessRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingleRole(role) => write!(f, "role '{role}'"),
            Self::AnyOfRoles(roles) => write!(f, "any of [{}]", roles.join(", ")),
            Self::Malformed(value) => write!(f, "malformed ({value})"),
            other => f.write_str(other.label()),
        }
    }
}

impl Serialize for AccessRequirement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AccessRequirement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}
