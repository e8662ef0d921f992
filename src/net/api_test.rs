#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::net::browser::NOT_AVAILABLE;

fn not_available() -> SessionError {
    SessionError::Transport(NOT_AVAILABLE.to_owned())
}

#[test]
fn browser_transport_joins_prefix_and_path() {
    assert_eq!(BrowserTransport::default().url("/me"), "/me");
    assert_eq!(BrowserTransport::new("/api/").url("/auth/login"), "/api/auth/login");
}

#[tokio::test]
async fn fetch_current_user_is_none_on_server() {
    assert_eq!(fetch_current_user().await, None);
}

#[tokio::test]
async fn sign_in_propagates_transport_error() {
    let request = SignInRequest { email: "ada@example.com".to_owned(), password: "pw".to_owned() };
    assert_eq!(sign_in(&request).await.unwrap_err(), not_available());
}

#[tokio::test]
async fn sign_up_propagates_transport_error() {
    let request = SignUpRequest {
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
        display_name: "Ada".to_owned(),
    };
    assert_eq!(sign_up(&request).await.unwrap_err(), not_available());
}

#[tokio::test]
async fn sign_out_and_fetch_account_propagate_transport_error() {
    assert_eq!(sign_out().await.unwrap_err(), not_available());
    assert_eq!(fetch_account().await.unwrap_err(), not_available());
}
