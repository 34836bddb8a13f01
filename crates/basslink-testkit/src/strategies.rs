//! Property test strategies for BassLink types
//!
//! # Example
//!
//! ```rust
//! use basslink_testkit::strategies::arb_identity;
//! use proptest::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn identity_has_a_role(identity in arb_identity()) {
//!         prop_assert!(!identity.role().as_str().is_empty());
//!     }
//! }
//! ```

use basslink_core::{AccessRequirement, Identity, RoleClass, UserRef};
use proptest::prelude::*;

// Re-export proptest for convenience
pub use proptest;

/// Any of the three role classes.
pub fn arb_role_class() -> impl Strategy<Value = RoleClass> {
    prop::sample::select(RoleClass::ALL.to_vec())
}

/// Identity with a deterministic user reference derived from a seed.
pub fn arb_identity() -> impl Strategy<Value = Identity> {
    (arb_role_class(), 0u128..10_000).prop_map(|(role, seed)| {
        Identity::new(role, UserRef::from_uuid(uuid::Uuid::from_u128(seed)))
    })
}

/// Signed-in identity or nobody.
pub fn arb_optional_identity() -> impl Strategy<Value = Option<Identity>> {
    prop::option::of(arb_identity())
}

/// Role names a route may declare, including the guest sentinel, the empty
/// string, fragments of real role names and unknown names.
pub fn arb_role_name() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_role_class().prop_map(|role| role.as_str().to_string()),
        Just("guest".to_string()),
        Just(String::new()),
        Just("min".to_string()),
        Just("superadmin".to_string()),
        "[a-z]{1,8}",
    ]
}

/// Any access requirement a route table can produce.
pub fn arb_requirement() -> impl Strategy<Value = AccessRequirement> {
    prop_oneof![
        Just(AccessRequirement::Unset),
        Just(AccessRequirement::Unrestricted),
        Just(AccessRequirement::AuthenticatedOnly),
        Just(AccessRequirement::GuestOnly),
        arb_role_name().prop_map(AccessRequirement::SingleRole),
        prop::collection::vec(arb_role_name(), 0..4).prop_map(AccessRequirement::AnyOfRoles),
    ]
}

/// Pathnames under the three portals, plus the exempt routes.
pub fn arb_path() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "/", "/callback", "/signin", "/agent/signin", "/office/signin", "/signout",
            "/logout", "/404", "/401",
        ])
        .prop_map(str::to_string),
        (
            prop::sample::select(vec!["", "/agent", "/office"]),
            "[a-z]{1,10}"
        )
            .prop_map(|(portal, page)| format!("{portal}/{page}")),
    ]
}
