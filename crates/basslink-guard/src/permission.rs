//! Route permission evaluation.
//!
//! A pure decision over a route's [`AccessRequirement`] and the current
//! identity. There are no error conditions: every requirement degrades to a
//! boolean, and declarations of unrecognized shape deny.
//!
//! | requirement | signed in | signed out |
//! |---|---|---|
//! | `Unset` / `Unrestricted` | allow | allow |
//! | `AuthenticatedOnly` | allow | deny |
//! | `GuestOnly` | deny | allow |
//! | `SingleRole("")` | allow | allow |
//! | `SingleRole("guest")` | deny | allow |
//! | `SingleRole(r)` | role class contains `r` | deny |
//! | `AnyOfRoles([])` | allow | allow |
//! | `AnyOfRoles(list)` | role class in list | `"guest"` in list |

use basslink_core::{AccessRequirement, Identity, GUEST_ROLE};

/// Decide whether `identity` may view a route declaring `requirement`.
pub fn evaluate(requirement: &AccessRequirement, identity: Option<&Identity>) -> bool {
    match requirement {
        AccessRequirement::Unset | AccessRequirement::Unrestricted => true,
        AccessRequirement::AuthenticatedOnly => identity.is_some(),
        AccessRequirement::GuestOnly => identity.is_none(),
        AccessRequirement::SingleRole(role) => single_role(role, identity),
        AccessRequirement::AnyOfRoles(roles) => any_of_roles(roles, identity),
        AccessRequirement::Malformed(_) => false,
    }
}

/// Single-role matching is a containment test against the role class name,
/// not equality: a requirement of `"min"` is satisfied by `admin`.
fn single_role(role: &str, identity: Option<&Identity>) -> bool {
    if role.is_empty() {
        return true;
    }
    if role == GUEST_ROLE {
        return identity.is_none();
    }
    match identity {
        Some(identity) => identity.role().as_str().contains(role),
        None => false,
    }
}

fn any_of_roles(roles: &[String], identity: Option<&Identity>) -> bool {
    if roles.is_empty() {
        return true;
    }
    let wanted = match identity {
        Some(identity) => identity.role().as_str(),
        None => GUEST_ROLE,
    };
    roles.iter().any(|role| role == wanted)
}
