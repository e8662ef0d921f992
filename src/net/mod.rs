//! Networking modules for the session API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` implements the session transport on `gloo-net`, and `api` wraps
//! the shared session facade for page and component code.

pub mod api;
pub mod browser;
