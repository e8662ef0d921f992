//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// Whether a route guard should send the visitor to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
