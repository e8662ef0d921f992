//! Conversation page: header, branching thread, and composer.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::composer::Composer;
use crate::components::message_thread::MessageThread;
use crate::components::page_header::PageHeader;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Authenticated landing route.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn ConversationPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="conversation-page">
            <PageHeader/>
            <main class="conversation-page__body">
                <MessageThread/>
                <Composer/>
            </main>
        </div>
    }
}
