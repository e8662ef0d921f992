//! Session client configuration parsed from environment variables.
//!
//! Timeouts are explicit so native callers never inherit an unbounded
//! default. There is no retry setting: every call is attempted exactly once.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Error returned when an environment value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} (expected a positive integer)")]
    InvalidNumber { var: &'static str, value: String },
    #[error("invalid {var}: {value:?} (expected an http:// or https:// URL)")]
    InvalidBaseUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for SessionTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Server origin without a trailing slash.
    pub base_url: String,
    pub timeouts: SessionTimeouts,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeouts: SessionTimeouts::default() }
    }
}

impl SessionConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `GPTREE_BASE_URL`: default `http://127.0.0.1:3000`
    /// - `GPTREE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `GPTREE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] but reads values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value is set but unusable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = match lookup("GPTREE_BASE_URL") {
            Some(raw) => parse_base_url("GPTREE_BASE_URL", &raw)?,
            None => DEFAULT_BASE_URL.to_owned(),
        };
        let timeouts = SessionTimeouts {
            request_secs: parse_secs(
                "GPTREE_REQUEST_TIMEOUT_SECS",
                lookup("GPTREE_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_secs(
                "GPTREE_CONNECT_TIMEOUT_SECS",
                lookup("GPTREE_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
        };
        Ok(Self { base_url, timeouts })
    }

    /// Join an endpoint path onto the base URL.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Validate a base URL and strip trailing slashes.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidBaseUrl`] for non-HTTP schemes.
pub fn parse_base_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl { var, value: raw.to_owned() });
    }
    Ok(trimmed.to_owned())
}

/// Accept a timeout only when it is non-zero.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidNumber`] for zero.
pub fn positive_secs(var: &'static str, secs: u64) -> Result<u64, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::InvalidNumber { var, value: secs.to_string() });
    }
    Ok(secs)
}

fn parse_secs(var: &'static str, raw: Option<String>, default: u64) -> Result<u64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidNumber { var, value: raw.clone() })?;
    positive_secs(var, secs).map_err(|_| ConfigError::InvalidNumber { var, value: raw })
}
