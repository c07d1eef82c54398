//! The logged-in user, threaded explicitly through every operation.
//!
//! The identity subsystem owns login state; this layer only needs to know
//! which user namespace to touch, if any. Callers build a fresh `UserContext`
//! per call - nothing here caches it.

/// The currently authenticated user, or nobody.
///
/// With no user logged in there is no namespace to persist into, so every
/// load returns the empty default and every save is skipped without touching
/// the disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserContext {
    user: Option<String>,
}

impl UserContext {
    /// Context for a logged-in user.
    #[must_use]
    pub fn logged_in(user: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
        }
    }

    /// Context with nobody logged in.
    #[must_use]
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// The user identifier, if somebody is logged in.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Whether a user is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }
}
