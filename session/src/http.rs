//! Native [`Transport`] on top of `reqwest`.
//!
//! Thin HTTP wrapper: applies the configured timeouts and an optional session
//! cookie, then reports status + body. Retry is deliberately absent.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::Mutex;
use std::time::Duration;

use reqwest::header::{COOKIE, HeaderMap, HeaderValue, SET_COOKIE};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::transport::{Method, Transport, TransportResponse};

pub struct HttpTransport {
    http: reqwest::Client,
    config: SessionConfig,
    last_set_cookie: Mutex<Option<String>>,
}

impl HttpTransport {
    /// Build a transport for `config`, optionally sending `session_cookie`
    /// (a `Cookie` header value such as `session_token=abc`) on every request.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Transport`] if the cookie is not a valid header
    /// value or the HTTP client fails to build.
    pub fn new(config: &SessionConfig, session_cookie: Option<&str>) -> Result<Self, SessionError> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = session_cookie {
            let value = HeaderValue::from_str(cookie).map_err(|e| SessionError::Transport(e.to_string()))?;
            headers.insert(COOKIE, value);
        }
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| SessionError::Transport(e.to_string()))?;
        Ok(Self { http, config: config.clone(), last_set_cookie: Mutex::new(None) })
    }

    /// Cookies set by the most recent response that set any, as a
    /// `Cookie` header value (`a=1; b=2`).
    pub fn last_set_cookie(&self) -> Option<String> {
        self.last_set_cookie.lock().ok().and_then(|guard| guard.clone())
    }

    fn remember_cookie(&self, headers: &HeaderMap) {
        let Some(cookie) = cookie_header(headers) else {
            return;
        };
        if let Ok(mut slot) = self.last_set_cookie.lock() {
            *slot = Some(cookie);
        }
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<TransportResponse, SessionError> {
        let url = self.config.url(path);
        let request = match method {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        let request = if let Some(json) = body { request.json(&json) } else { request };

        let response = request
            .send()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;

        self.remember_cookie(response.headers());
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;
        Ok(TransportResponse { status, body })
    }
}

/// Join every `Set-Cookie` header into one `Cookie` header value.
fn cookie_header(headers: &HeaderMap) -> Option<String> {
    let pairs: Vec<String> = headers
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(cookie_pair)
        .collect();
    if pairs.is_empty() {
        return None;
    }
    Some(pairs.join("; "))
}

/// Extract `name=value` from a `Set-Cookie` header, dropping attributes.
fn cookie_pair(header: &str) -> Option<String> {
    let pair = header.split(';').next()?.trim();
    if pair.is_empty() || !pair.contains('=') {
        return None;
    }
    Some(pair.to_owned())
}
