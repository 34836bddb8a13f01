//! Supertraits for common effect combinations

use super::{LocationEffects, NavigationEffects, SessionEffects, StorageEffects};

/// Everything a route guard needs from its host.
///
/// Combines the session and location reads, navigation, and the tab storage
/// that backs redirect memory.
pub trait GuardEffects: SessionEffects + LocationEffects + NavigationEffects + StorageEffects {}

/// Automatic implementation for types that satisfy the required bounds
impl<T> GuardEffects for T where
    T: SessionEffects + LocationEffects + NavigationEffects + StorageEffects
{
}
