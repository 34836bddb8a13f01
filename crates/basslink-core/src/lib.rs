//! # BassLink Core - Layer 1: Interfaces
//!
//! Types, effect interfaces and configuration shared by the BassLink
//! authorization crates.
//!
//! - [`types`]: identities, role classes, portals and route access requirements
//! - [`effects`]: synchronous interfaces to the session, location, navigation
//!   and tab-storage collaborators
//! - [`config`]: guard configuration with TOML and environment loading
//!
//! This crate holds no behavior beyond parsing and validation. The decision
//! logic lives in `basslink-guard`, production handlers in `basslink-effects`.

pub mod config;
pub mod effects;
pub mod errors;
pub mod types;

pub use config::{GuardConfig, SignInPaths, DEFAULT_EXEMPT_PATHS};
pub use effects::{
    GuardEffects, LocationEffects, NavigationEffects, SessionEffects, StorageEffects,
    StorageError,
};
pub use errors::{BassLinkError, Result};
pub use types::{AccessRequirement, Identity, Portal, RoleClass, UserRef, GUEST_ROLE};
