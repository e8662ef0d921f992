//! Session calls used by pages and components.
//!
//! Thin wrappers over [`SessionClient`] with the browser transport. Failures
//! are logged in the browser and handed back unchanged; pages decide how to
//! show them.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::{AccountResponse, SessionClient, SessionError, SignInRequest, SignUpRequest, User};

use super::browser::BrowserTransport;

/// Session client for same-origin requests.
pub fn client() -> SessionClient<BrowserTransport> {
    SessionClient::new(BrowserTransport::default())
}

/// Fetch the currently authenticated user from `/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    client()
        .fetch_session()
        .await
        .map(|session| session.user)
        .inspect_err(|e| log_failure("fetch session", e))
        .ok()
}

/// Sign in with email + password.
///
/// # Errors
///
/// Returns the session facade's error unchanged.
pub async fn sign_in(request: &SignInRequest) -> Result<User, SessionError> {
    client()
        .sign_in(request)
        .await
        .map(|session| session.user)
        .inspect_err(|e| log_failure("sign in", e))
}

/// Create an account and start a session.
///
/// # Errors
///
/// Returns the session facade's error unchanged.
pub async fn sign_up(request: &SignUpRequest) -> Result<User, SessionError> {
    client()
        .sign_up(request)
        .await
        .map(|session| session.user)
        .inspect_err(|e| log_failure("sign up", e))
}

/// End the current session.
///
/// # Errors
///
/// Returns the session facade's error unchanged.
pub async fn sign_out() -> Result<(), SessionError> {
    client().sign_out().await.inspect_err(|e| log_failure("sign out", e))
}

/// Fetch the account summary for the account page.
///
/// # Errors
///
/// Returns the session facade's error unchanged.
pub async fn fetch_account() -> Result<AccountResponse, SessionError> {
    client().fetch_account().await.inspect_err(|e| log_failure("fetch account", e))
}

fn log_failure(op: &str, error: &SessionError) {
    #[cfg(feature = "hydrate")]
    log::warn!("{op} failed: {error}");
    #[cfg(not(feature = "hydrate"))]
    let _ = (op, error);
}
