//! Session facade: five typed calls over a [`Transport`].
//!
//! DESIGN
//! ======
//! The facade keeps no state between calls. Each operation encodes its
//! request value, hands it to the transport, and decodes the body on a 2xx
//! answer. Anything else is returned to the caller untouched: no retry, no
//! backoff, no cache.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::SessionError;
use crate::transport::{Method, Transport, TransportResponse};
use crate::types::{AccountResponse, SessionResponse, SignInRequest, SignUpRequest};

pub const ME_PATH: &str = "/me";
pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const LOGOUT_PATH: &str = "/auth/logout";
pub const ACCOUNT_PATH: &str = "/account";

/// Typed client for the session endpoints.
#[derive(Clone, Debug)]
pub struct SessionClient<T> {
    transport: T,
}

impl<T: Transport> SessionClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Borrow the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Read the server-side session via `GET /me`.
    ///
    /// # Errors
    ///
    /// Returns the transport's failure, a non-2xx status, or a decode error.
    pub async fn fetch_session(&self) -> Result<SessionResponse, SessionError> {
        self.call(Method::Get, ME_PATH, None).await
    }

    /// Sign in via `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the transport's failure, a non-2xx status, or a decode error.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<SessionResponse, SessionError> {
        let body = encode(request)?;
        self.call(Method::Post, LOGIN_PATH, Some(body)).await
    }

    /// Create an account via `POST /auth/signup`.
    ///
    /// # Errors
    ///
    /// Returns the transport's failure, a non-2xx status, or a decode error.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<SessionResponse, SessionError> {
        let body = encode(request)?;
        self.call(Method::Post, SIGNUP_PATH, Some(body)).await
    }

    /// End the session via `POST /auth/logout`. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the transport's failure or a non-2xx status.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        self.send(Method::Post, LOGOUT_PATH, None).await?;
        Ok(())
    }

    /// Fetch the user plus conversation count via `GET /account`.
    ///
    /// # Errors
    ///
    /// Returns the transport's failure, a non-2xx status, or a decode error.
    pub async fn fetch_account(&self) -> Result<AccountResponse, SessionError> {
        self.call(Method::Get, ACCOUNT_PATH, None).await
    }

    async fn call<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<R, SessionError> {
        let response = self.send(method, path, body).await?;
        decode_body(&response.body)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<TransportResponse, SessionError> {
        let response = self.transport.send(method, path, body).await.inspect_err(|e| {
            tracing::debug!(method = method.as_str(), %path, error = %e, "session request failed");
        })?;
        tracing::debug!(method = method.as_str(), %path, status = response.status, "session response");
        if !response.is_success() {
            return Err(SessionError::Status { status: response.status, body: response.body });
        }
        Ok(response)
    }
}

fn encode<B: Serialize>(body: &B) -> Result<serde_json::Value, SessionError> {
    serde_json::to_value(body).map_err(|e| SessionError::Encode(e.to_string()))
}

fn decode_body<R: DeserializeOwned>(body: &str) -> Result<R, SessionError> {
    serde_json::from_str(body).map_err(|e| SessionError::Decode(e.to_string()))
}
