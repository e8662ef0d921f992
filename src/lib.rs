//! # gptree
//!
//! Leptos + WASM frontend for GPTree, a chat client with branching
//! conversations.
//!
//! This crate contains pages, components, application state, and the browser
//! transport for the shared `session` crate. Branch selection lives in
//! [`state::conversation`]; the navigator in [`components::branch_navigator`]
//! is a stateless view over it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
