//! Route guard state machine.
//!
//! A [`RouteGuard`] wraps one protected route. Each evaluation reads the
//! current identity and location, asks [`permission::evaluate`] for a
//! verdict, and then either grants the route or writes redirect memory and
//! navigates away, all within one synchronous pass.
//!
//! ```text
//!            granted
//! Pending ───────────► Granted
//!    │                    │ identity/location change
//!    │ denied             ▼
//!    └──────────────► Redirecting { target }
//! ```
//!
//! Denied visitors:
//! - signed out: the current location is remembered (unless exempt) and the
//!   visitor is sent to the sign-in page of the route's portal
//! - signed in: the unauthorized path is remembered (unless exempt), then the
//!   visitor is sent to the remembered URL, falling back to the route's login
//!   redirect, and the slot is emptied

use crate::permission;
use crate::redirect_memory::RedirectMemory;
use crate::route::RouteDeclaration;
use basslink_core::{GuardConfig, GuardEffects, Identity, Portal, RoleClass};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Lifecycle of a guard for the current inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GuardState {
    /// Not evaluated yet
    #[default]
    Pending,
    /// Route content may render
    Granted,
    /// Navigation away has been issued
    Redirecting {
        /// Navigation target
        target: String,
    },
}

impl GuardState {
    /// What the host should render in this state.
    pub fn view(&self) -> GuardView {
        match self {
            Self::Granted => GuardView::Children,
            Self::Pending | Self::Redirecting { .. } => GuardView::LoadingPlaceholder,
        }
    }
}

/// What the host renders for a guarded route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardView {
    /// The route's own content
    Children,
    /// Loading placeholder while access is pending or a redirect is underway
    LoadingPlaceholder,
}

/// Why a visitor was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denial {
    /// Nobody is signed in
    SignedOut,
    /// The signed-in identity lacks the privilege
    Insufficient,
}

/// Record of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardOutcome {
    /// Declared route path
    pub route: String,
    /// Pathname that was evaluated
    pub location: String,
    /// Role of the signed-in identity, if any
    pub role: Option<RoleClass>,
    /// Permission verdict
    pub granted: bool,
    /// Denial reason when not granted
    pub denial: Option<Denial>,
    /// Value written to redirect memory during this pass
    pub remembered: Option<String>,
    /// Navigation issued during this pass
    pub navigate_to: Option<String>,
    /// Resulting guard state
    pub state: GuardState,
}

impl GuardOutcome {
    /// What the host should render.
    pub fn view(&self) -> GuardView {
        self.state.view()
    }
}

/// Gate for one protected route.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    declaration: RouteDeclaration,
    config: Arc<GuardConfig>,
    state: GuardState,
    /// Inputs of the last evaluation
    last_inputs: Option<(Option<Identity>, String)>,
}

impl RouteGuard {
    /// Guard for `declaration` under `config`.
    pub fn new(declaration: RouteDeclaration, config: Arc<GuardConfig>) -> Self {
        Self {
            declaration,
            config,
            state: GuardState::Pending,
            last_inputs: None,
        }
    }

    /// Guarded route
    pub fn declaration(&self) -> &RouteDeclaration {
        &self.declaration
    }

    /// Current state
    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// What the host should render right now.
    pub fn view(&self) -> GuardView {
        self.state.view()
    }

    /// Reactive entry point: re-evaluate only if identity or location changed
    /// since the last pass.
    pub fn sync<E: GuardEffects + ?Sized>(&mut self, effects: &E) -> GuardView {
        let identity = effects.current_identity();
        let location = effects.current_path();
        let unchanged = self
            .last_inputs
            .as_ref()
            .is_some_and(|(last_identity, last_location)| {
                *last_identity == identity && *last_location == location
            });
        if unchanged {
            return self.view();
        }
        self.run(identity, location, effects).view()
    }

    /// Evaluate unconditionally against the current identity and location.
    pub fn evaluate<E: GuardEffects + ?Sized>(&mut self, effects: &E) -> GuardView {
        self.evaluate_with_outcome(effects).view()
    }

    /// Evaluate and return the full record of what happened.
    pub fn evaluate_with_outcome<E: GuardEffects + ?Sized>(
        &mut self,
        effects: &E,
    ) -> GuardOutcome {
        let identity = effects.current_identity();
        let location = effects.current_path();
        self.run(identity, location, effects)
    }

    fn run<E: GuardEffects + ?Sized>(
        &mut self,
        identity: Option<Identity>,
        location: String,
        effects: &E,
    ) -> GuardOutcome {
        let memory = RedirectMemory::new(effects, &self.config.storage_key);
        let requirement = self.declaration.auth();
        let granted = permission::evaluate(requirement, identity.as_ref());
        let role = identity.as_ref().map(Identity::role);

        debug!(
            route = %self.declaration.path,
            %location,
            requirement = %requirement,
            role = ?role,
            granted,
            "route guard evaluated"
        );

        let mut outcome = GuardOutcome {
            route: self.declaration.path.clone(),
            location: location.clone(),
            role,
            granted,
            denial: None,
            remembered: None,
            navigate_to: None,
            state: GuardState::Granted,
        };

        if granted {
            memory.clear();
            self.state = GuardState::Granted;
            self.last_inputs = Some((identity, location));
            return outcome;
        }

        let exempt = self.config.is_exempt(&location);
        let (denial, target) = match &identity {
            None => {
                if !exempt {
                    memory.set(&location);
                    outcome.remembered = Some(location.clone());
                }
                let portal = self.declaration.portal();
                (Denial::SignedOut, self.sign_in_target(portal))
            }
            Some(_) => {
                if !exempt {
                    memory.set(&self.config.unauthorized_path);
                    outcome.remembered = Some(self.config.unauthorized_path.clone());
                }
                let target = memory.get().unwrap_or_else(|| {
                    self.declaration
                        .login_redirect_url(&self.config)
                        .to_string()
                });
                memory.clear();
                (Denial::Insufficient, target)
            }
        };

        info!(
            route = %self.declaration.path,
            %location,
            reason = ?denial,
            to = %target,
            "route guard redirecting"
        );
        effects.navigate(&target);

        self.state = GuardState::Redirecting {
            target: target.clone(),
        };
        self.last_inputs = Some((identity, location));

        outcome.denial = Some(denial);
        outcome.navigate_to = Some(target);
        outcome.state = self.state.clone();
        outcome
    }

    fn sign_in_target(&self, portal: Portal) -> String {
        self.config.sign_in_path(portal).to_string()
    }
}
