//! Domain types shared by every BassLink crate

pub mod identity;
pub mod portal;
pub mod requirement;

pub use identity::{Identity, RoleClass, UserRef};
pub use portal::Portal;
pub use requirement::{AccessRequirement, GUEST_ROLE};
