//! Top bar with navigation, theme toggle, identity, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! This component surfaces session metadata and primary navigation controls
//! that remain visible on every authenticated page.

#[cfg(test)]
#[path = "page_header_test.rs"]
mod page_header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::SessionError;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::theme;

/// Text shown in the header when the logout request fails.
pub fn sign_out_failure_message(error: &SessionError) -> String {
    format!("Sign-out failed: {error}")
}

/// Page header shared by the conversation and account pages.
#[component]
pub fn PageHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    let sign_out_error = RwSignal::new(None::<String>);

    let identity = move || {
        auth.with(|a| a.user.as_ref().map(|user| user.label().to_owned()))
            .unwrap_or_default()
    };

    let on_toggle_theme = move |_| {
        let next = theme::toggle(ui.with(|u| u.theme));
        ui.update(|u| u.theme = next);
    };

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            sign_out_error.set(None);
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_out().await {
                    Ok(()) => {
                        auth.update(|a| a.resolve(None));
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
                    Err(e) => sign_out_error.set(Some(sign_out_failure_message(&e))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &navigate;
    };

    view! {
        <header class="page-header">
            <a href="/" class="page-header__title">"GPTree"</a>
            <nav class="page-header__nav">
                <a href="/" class="page-header__link">"Conversation"</a>
                <a href="/account" class="page-header__link">"Account"</a>
            </nav>
            <span class="page-header__spacer"></span>
            <button
                class="btn page-header__theme-toggle"
                on:click=on_toggle_theme
                title="Toggle dark mode"
            >
                {move || ui.with(|u| u.theme.toggle_icon())}
            </button>
            <span class="page-header__self">{identity}</span>
            <button class="btn page-header__sign-out" on:click=on_sign_out title="Sign out">
                "Sign out"
            </button>
            {move || {
                sign_out_error
                    .get()
                    .map(|message| view! { <span class="page-header__error" role="alert">{message}</span> })
            }}
        </header>
    }
}
