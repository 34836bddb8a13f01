//! Effect interfaces for the guard's collaborators
//!
//! # Effect Classification
//!
//! - **Category**: Infrastructure Effect
//! - **Implementation**: `basslink-effects` (production), `basslink-testkit` (mocks)
//! - **Usage**: `basslink-guard`
//!
//! Every method is synchronous. A guard evaluation writes the redirect slot
//! and picks its navigation target in one pass, and nothing in between may
//! yield.

pub mod navigation;
pub mod session;
pub mod storage;
pub mod supertraits;

pub use navigation::NavigationEffects;
pub use session::{LocationEffects, SessionEffects};
pub use storage::{StorageEffects, StorageError};
pub use supertraits::GuardEffects;
