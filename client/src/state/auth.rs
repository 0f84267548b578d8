//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route switch to pick between gated views and their signed-out
//! fallbacks, and by chrome components for identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Viewer status as seen by gated routes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    /// Session fetch has not completed yet.
    Loading,
    SignedIn,
    SignedOut,
}

/// Authentication state tracking the current user and loading status.
///
/// Starts in the loading state so gated routes hold their placeholder until
/// the session fetch settles instead of redirecting a signed-in user.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Settled state after a session fetch.
    #[must_use]
    pub fn settled(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn status(&self) -> AuthStatus {
        match (&self.user, self.loading) {
            (Some(_), _) => AuthStatus::SignedIn,
            (None, true) => AuthStatus::Loading,
            (None, false) => AuthStatus::SignedOut,
        }
    }

    /// Signed-in users without a username are prompted to pick one.
    #[must_use]
    pub fn needs_username(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.username.as_deref().is_none_or(|name| name.trim().is_empty()))
    }
}
