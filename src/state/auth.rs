//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. The user record is only ever replaced by a
//! fresh server response, never edited locally.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State used before the first `/me` round-trip completes.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Replace the session with the result of a fetch.
    pub fn resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }
}
