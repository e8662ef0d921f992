//! Minimal HTTP capability the session facade runs on.

use crate::error::SessionError;

/// HTTP verbs used by the session endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Raw status + body returned by a transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and reports what happened.
///
/// Implementations must not retry or cache. Futures are not required to be
/// `Send` so browser transports built on `wasm-bindgen` futures qualify.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send `method path` with an optional JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Transport`] when no response was received.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<TransportResponse, SessionError>;
}
