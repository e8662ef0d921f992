//! Account page showing the signed-in user and their conversation count.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches `/account` once on mount. The result is displayed as returned;
//! a failure is shown verbatim with no retry.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::{AccountResponse, SessionError};

use crate::components::page_header::PageHeader;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// `"1 conversation"` / `"3 conversations"`.
pub fn conversation_count_label(count: u64) -> String {
    if count == 1 {
        "1 conversation".to_owned()
    } else {
        format!("{count} conversations")
    }
}

/// What the account page is showing.
#[derive(Clone, Debug, PartialEq)]
pub enum AccountView {
    Loading,
    Loaded(AccountResponse),
    Failed(String),
}

impl AccountView {
    pub fn from_result(result: Result<AccountResponse, SessionError>) -> Self {
        match result {
            Ok(response) => Self::Loaded(response),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let account = RwSignal::new(AccountView::Loading);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        account.set(AccountView::from_result(crate::net::api::fetch_account().await));
    });

    let body = move || match account.get() {
        AccountView::Loading => view! { <p class="account-page__status">"Loading account..."</p> }.into_any(),
        AccountView::Failed(message) => {
            view! { <p class="account-page__status account-page__status--error">{message}</p> }.into_any()
        }
        AccountView::Loaded(response) => {
            let display_name = response.user.display_name.clone().unwrap_or_else(|| "—".to_owned());
            view! {
                <dl class="account-page__details">
                    <dt>"Email"</dt>
                    <dd>{response.user.email}</dd>
                    <dt>"Display name"</dt>
                    <dd>{display_name}</dd>
                    <dt>"Conversations"</dt>
                    <dd>{conversation_count_label(response.conversation_count)}</dd>
                </dl>
            }
            .into_any()
        }
    };

    view! {
        <div class="account-page">
            <PageHeader/>
            <main class="account-page__body">
                <h1>"Account"</h1>
                {body}
            </main>
        </div>
    }
}
