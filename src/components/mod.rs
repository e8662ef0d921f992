//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render conversation chrome and interaction surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod branch_navigator;
pub mod composer;
pub mod message_thread;
pub mod page_header;
