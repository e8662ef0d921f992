//! Typed session API shared by the web client and the CLI.
//!
//! This crate owns the request/response values for the five session
//! endpoints and the [`SessionClient`] facade that maps them onto HTTP calls.
//! The facade only knows about the [`Transport`] capability, so the browser
//! (`gloo-net`) and native (`reqwest`) stacks plug in underneath it and tests
//! can substitute a scripted transport.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is retried or reinterpreted here. Transport failures come back to
//! the caller exactly as the transport reported them.

pub mod client;
pub mod config;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod transport;
pub mod types;

pub use client::SessionClient;
pub use config::{ConfigError, SessionConfig, SessionTimeouts};
pub use error::SessionError;
#[cfg(feature = "http")]
pub use http::HttpTransport;
pub use transport::{Method, Transport, TransportResponse};
pub use types::{AccountResponse, SessionResponse, SignInRequest, SignUpRequest, User};
