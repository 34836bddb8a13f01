//! Session and location interfaces
//!
//! Both collaborators are reactive on the host side: the host re-runs the
//! guard whenever either value changes. From the guard's point of view they
//! are plain synchronous reads.

use crate::types::Identity;

/// Source of the currently signed-in identity.
pub trait SessionEffects: Send + Sync {
    /// The signed-in identity, or `None` when nobody is signed in.
    fn current_identity(&self) -> Option<Identity>;
}

/// Source of the pathname being guarded.
pub trait LocationEffects: Send + Sync {
    /// Pathname of the current page, e.g. `/rates`.
    fn current_path(&self) -> String;
}
