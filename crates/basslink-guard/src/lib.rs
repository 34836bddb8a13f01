#![deny(clippy::await_holding_lock)]
//! # BassLink Guard - Layer 4: Route Authorization
//!
//! Decides who may view a BassLink route and where everybody else goes.
//!
//! - [`permission::evaluate`]: pure verdict over a route requirement and identity
//! - [`RedirectMemory`]: single tab-scoped slot remembering a denied destination
//! - [`RouteGuard`]: per-route state machine that grants, or remembers and redirects
//! - [`RouteTable`]: route declarations loaded from TOML
//!
//! Denial is an expected branch, not an error. The only fault the guard can
//! meet at runtime is unavailable storage, which reads as an empty slot.

pub mod guard;
pub mod permission;
pub mod redirect_memory;
pub mod route;

pub use guard::{Denial, GuardOutcome, GuardState, GuardView, RouteGuard};
pub use permission::evaluate;
pub use redirect_memory::RedirectMemory;
pub use route::{RouteDeclaration, RouteTable};
