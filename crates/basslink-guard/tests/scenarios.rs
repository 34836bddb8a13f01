//! End-to-end guard scenarios against a mock host.

use basslink_core::{AccessRequirement, GuardConfig, Identity, Portal, RoleClass};
use basslink_guard::{
    Denial, GuardState, GuardView, RedirectMemory, RouteDeclaration, RouteGuard, RouteTable,
};
use basslink_testkit::MockEffects;
use std::sync::Arc;

const KEY: &str = "basslinkRedirectUrl";

fn config() -> Arc<GuardConfig> {
    Arc::new(GuardConfig::default())
}

fn admin_rates() -> RouteGuard {
    RouteGuard::new(
        RouteDeclaration::new("/rates", AccessRequirement::role("admin"))
            .with_portal(Portal::Office),
        config(),
    )
}

#[test]
fn signed_out_admin_route_remembers_location_and_goes_to_office_sign_in() {
    let effects = MockEffects::signed_out("/rates");
    let mut guard = admin_rates();

    let outcome = guard.evaluate_with_outcome(&effects);

    assert!(!outcome.granted);
    assert_eq!(outcome.denial, Some(Denial::SignedOut));
    assert_eq!(effects.stored(KEY).as_deref(), Some("/rates"));
    assert_eq!(effects.navigations(), vec!["/office/signin"]);
    assert_eq!(outcome.view(), GuardView::LoadingPlaceholder);
}

#[test]
fn admin_route_outside_the_office_still_signs_in_at_the_office() {
    let table = RouteTable::from_toml_str(
        r#"
        [[routes]]
        path = "/rates"
        auth = "admin"
        "#,
    )
    .unwrap();
    let effects = MockEffects::signed_out("/rates");
    let mut guard = RouteGuard::new(table.declaration_for("/rates"), config());

    let outcome = guard.evaluate_with_outcome(&effects);

    assert_eq!(outcome.remembered.as_deref(), Some("/rates"));
    assert_eq!(outcome.navigate_to.as_deref(), Some("/office/signin"));
}

#[test]
fn under_privileged_identity_is_sent_to_unauthorized_page() {
    let effects = MockEffects::signed_in(RoleClass::Agent, "/rates");
    let mut guard = admin_rates();

    let outcome = guard.evaluate_with_outcome(&effects);

    assert_eq!(outcome.denial, Some(Denial::Insufficient));
    assert_eq!(outcome.remembered.as_deref(), Some("/401"));
    assert_eq!(effects.navigations(), vec!["/401"]);
    // Consumed in the same pass.
    assert_eq!(effects.stored(KEY), None);
    assert_eq!(
        guard.state(),
        &GuardState::Redirecting {
            target: "/401".to_string()
        }
    );
}

#[test]
fn exempt_location_is_not_remembered() {
    let effects = MockEffects::signed_out("/signin");
    let mut guard = RouteGuard::new(
        RouteDeclaration::new("/signin", AccessRequirement::AuthenticatedOnly),
        config(),
    );

    let outcome = guard.evaluate_with_outcome(&effects);

    assert_eq!(outcome.remembered, None);
    assert_eq!(effects.stored(KEY), None);
    assert_eq!(effects.navigations(), vec!["/signin"]);
}

#[test]
fn granted_access_clears_stale_memory() {
    let effects = MockEffects::signed_in(RoleClass::Admin, "/rates");
    effects.seed_storage(KEY, "/deals");
    let mut guard = admin_rates();

    assert_eq!(guard.evaluate(&effects), GuardView::Children);
    assert_eq!(effects.stored(KEY), None);
    assert!(effects.navigations().is_empty());
}

#[test]
fn signed_in_denial_on_exempt_path_falls_back_to_login_redirect() {
    let effects = MockEffects::signed_in(RoleClass::Client, "/signin");
    let mut guard = RouteGuard::new(
        RouteDeclaration::new("/signin", AccessRequirement::GuestOnly)
            .with_login_redirect("/dashboard"),
        config(),
    );

    let outcome = guard.evaluate_with_outcome(&effects);

    assert_eq!(outcome.remembered, None);
    assert_eq!(outcome.navigate_to.as_deref(), Some("/dashboard"));
}

#[test]
fn sign_in_round_trip_returns_to_original_destination() {
    let table = RouteTable::from_toml_str(
        r#"
        [[routes]]
        path = "/office/rates"
        auth = "admin"

        [[routes]]
        path = "/office/signin"
        auth = "guest"
        "#,
    )
    .unwrap();
    let config = config();
    let effects = MockEffects::signed_out("/office/rates/today");

    let mut rates = RouteGuard::new(table.declaration_for("/office/rates/today"), config.clone());
    rates.sync(&effects);
    assert_eq!(effects.last_navigation().as_deref(), Some("/office/signin"));
    effects.follow_last_navigation();

    // The sign-in form itself renders unguarded; its guest-only guard mounts
    // once the session carries an identity.
    effects.sign_in(Identity::with_role(RoleClass::Admin));
    let mut sign_in = RouteGuard::new(table.declaration_for("/office/signin"), config);
    assert_eq!(sign_in.sync(&effects), GuardView::LoadingPlaceholder);
    assert_eq!(
        effects.last_navigation().as_deref(),
        Some("/office/rates/today")
    );
    assert_eq!(effects.stored(KEY), None);

    effects.follow_last_navigation();
    assert_eq!(rates.sync(&effects), GuardView::Children);
}

#[test]
fn unavailable_storage_degrades_to_default_redirect() {
    let effects = MockEffects::signed_in(RoleClass::Client, "/rates");
    effects.set_storage_available(false);
    let mut guard = admin_rates();

    let outcome = guard.evaluate_with_outcome(&effects);

    assert_eq!(outcome.navigate_to.as_deref(), Some("/"));
}

#[test]
fn repeated_denial_at_unauthorized_page_rewrites_it() {
    let effects = MockEffects::signed_in(RoleClass::Client, "/401");
    let mut guard = RouteGuard::new(
        RouteDeclaration::new("/401", AccessRequirement::role("admin")),
        config(),
    );

    let outcome = guard.evaluate_with_outcome(&effects);

    assert_eq!(outcome.remembered.as_deref(), Some("/401"));
    assert_eq!(outcome.navigate_to.as_deref(), Some("/401"));
}

#[test]
fn sign_out_does_not_clear_memory() {
    let effects = MockEffects::signed_out("/agent/deals");
    let mut guard = RouteGuard::new(
        RouteDeclaration::new("/agent/deals", AccessRequirement::any_of(["agent"])),
        config(),
    );
    guard.evaluate(&effects);
    assert_eq!(effects.last_navigation().as_deref(), Some("/agent/signin"));

    effects.sign_in(Identity::with_role(RoleClass::Agent));
    effects.sign_out();
    assert_eq!(effects.stored(KEY).as_deref(), Some("/agent/deals"));

    RedirectMemory::new(&effects, KEY).reset();
    assert_eq!(effects.stored(KEY), None);
}

#[test]
fn custom_storage_key_is_honoured() {
    let config = GuardConfig {
        storage_key: "tabReturnTo".to_string(),
        ..GuardConfig::default()
    };
    let effects = MockEffects::signed_out("/contacts");
    let mut guard = RouteGuard::new(
        RouteDeclaration::new("/contacts", AccessRequirement::AuthenticatedOnly),
        Arc::new(config),
    );

    guard.evaluate(&effects);

    assert_eq!(effects.stored("tabReturnTo").as_deref(), Some("/contacts"));
    assert_eq!(effects.stored(KEY), None);
}
