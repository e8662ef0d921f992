//! Error type for session calls.

/// A session request failed.
///
/// Every variant means the same thing to callers: the request did not
/// produce a usable result. The variants only record where the failure came
/// from so it can be shown as-is.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The transport could not complete the request (network, TLS, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl SessionError {
    /// HTTP status attached to the failure, if the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
