//! # BassLink Testkit - Layer 8: Testing Infrastructure
//!
//! - [`MockEffects`]: in-memory session, location, navigation log and tab storage
//! - [`strategies`]: proptest strategies for identities and access requirements

pub mod mock_effects;
pub mod strategies;

pub use mock_effects::MockEffects;
