//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `conversation`, `ui`) so individual
//! components can depend on small focused models.

pub mod auth;
pub mod conversation;
pub mod ui;
