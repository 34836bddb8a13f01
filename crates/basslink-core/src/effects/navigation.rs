//! Client-side navigation interface

/// Fire-and-forget router navigation.
///
/// Navigation is idempotent from the guard's perspective: a later call
/// supersedes an earlier one that has not completed yet.
pub trait NavigationEffects: Send + Sync {
    /// Navigate to the given path.
    fn navigate(&self, path: &str);
}
