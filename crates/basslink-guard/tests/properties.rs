//! Property tests for permission evaluation and redirect memory.

use basslink_core::{AccessRequirement, GuardConfig};
use basslink_effects::MemoryStorageHandler;
use basslink_guard::{evaluate, GuardView, RedirectMemory, RouteDeclaration, RouteGuard};
use basslink_testkit::strategies::{
    arb_identity, arb_optional_identity, arb_path, arb_requirement, arb_role_class,
};
use basslink_testkit::MockEffects;
use proptest::prelude::*;
use std::sync::Arc;

proptest! {
    #[test]
    fn unset_and_unrestricted_always_allow(identity in arb_optional_identity()) {
        prop_assert!(evaluate(&AccessRequirement::Unset, identity.as_ref()));
        prop_assert!(evaluate(&AccessRequirement::Unrestricted, identity.as_ref()));
    }

    #[test]
    fn authenticated_only_tracks_presence(identity in arb_optional_identity()) {
        prop_assert_eq!(
            evaluate(&AccessRequirement::AuthenticatedOnly, identity.as_ref()),
            identity.is_some()
        );
    }

    #[test]
    fn guest_only_tracks_absence(identity in arb_optional_identity()) {
        prop_assert_eq!(
            evaluate(&AccessRequirement::GuestOnly, identity.as_ref()),
            identity.is_none()
        );
    }

    #[test]
    fn empty_role_list_allows_everyone(identity in arb_optional_identity()) {
        prop_assert!(evaluate(&AccessRequirement::AnyOfRoles(vec![]), identity.as_ref()));
    }

    #[test]
    fn guest_role_never_admits_an_identity(identity in arb_identity()) {
        prop_assert!(!evaluate(&AccessRequirement::role("guest"), Some(&identity)));
        prop_assert!(evaluate(&AccessRequirement::role("guest"), None));
    }

    #[test]
    fn own_role_is_always_sufficient(role in arb_role_class(), identity in arb_identity()) {
        let matching = basslink_core::Identity::new(role, identity.user());
        prop_assert!(evaluate(&AccessRequirement::role(role.as_str()), Some(&matching)));
        prop_assert!(evaluate(&AccessRequirement::any_of([role.as_str()]), Some(&matching)));
    }

    #[test]
    fn signed_out_role_lists_need_guest(roles in prop::collection::vec("[a-z]{0,6}", 1..4)) {
        let expected = roles.iter().any(|r| r == "guest");
        prop_assert_eq!(evaluate(&AccessRequirement::AnyOfRoles(roles), None), expected);
    }

    #[test]
    fn memory_keeps_only_the_last_write(first in "/[a-z]{1,8}", second in "/[a-z]{1,8}") {
        let storage = MemoryStorageHandler::new();
        let memory = RedirectMemory::new(&storage, "basslinkRedirectUrl");
        memory.set(&first);
        memory.set(&second);
        prop_assert_eq!(memory.get(), Some(second));
        memory.clear();
        prop_assert_eq!(memory.get(), None);
    }

    #[test]
    fn guard_view_matches_verdict(
        requirement in arb_requirement(),
        identity in arb_optional_identity(),
        path in arb_path(),
    ) {
        let effects = MockEffects::signed_out(&path);
        if let Some(identity) = identity.clone() {
            effects.sign_in(identity);
        }
        let granted = evaluate(&requirement, identity.as_ref());
        let mut guard = RouteGuard::new(
            RouteDeclaration::new(path.clone(), requirement),
            Arc::new(GuardConfig::default()),
        );

        let outcome = guard.evaluate_with_outcome(&effects);

        prop_assert_eq!(outcome.granted, granted);
        if granted {
            prop_assert_eq!(outcome.view(), GuardView::Children);
            prop_assert!(effects.navigations().is_empty());
        } else {
            prop_assert_eq!(outcome.view(), GuardView::LoadingPlaceholder);
            prop_assert_eq!(effects.navigations().len(), 1);
        }
        // Signed-in evaluations always leave the slot empty.
        if identity.is_some() {
            prop_assert_eq!(effects.stored("basslinkRedirectUrl"), None);
        }
    }
}
