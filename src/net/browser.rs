//! Browser [`Transport`] built on `gloo-net`.
//!
//! Client-side (hydrate): real same-origin `fetch` calls, so the session
//! cookie rides along automatically and timeouts are the browser's.
//! Server-side (SSR) and tests: every request fails with a transport error
//! since these endpoints are only meaningful in the browser.

#![allow(clippy::unused_async)]

use session::{Method, SessionError, Transport, TransportResponse};

pub const NOT_AVAILABLE: &str = "not available on server";

/// Transport that prefixes every path with `prefix` (empty for same origin).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserTransport {
    prefix: String,
}

impl BrowserTransport {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into().trim_end_matches('/').to_owned() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.prefix, path)
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<TransportResponse, SessionError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url(path);
            let builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
            };
            let sent = match body {
                Some(json) => {
                    builder
                        .json(&json)
                        .map_err(|e| SessionError::Transport(e.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| SessionError::Transport(e.to_string()))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| SessionError::Transport(e.to_string()))?;
            Ok(TransportResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, body);
            Err(SessionError::Transport(NOT_AVAILABLE.to_owned()))
        }
    }
}
