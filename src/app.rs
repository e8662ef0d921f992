//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{account::AccountPage, conversation::ConversationPage, login::LoginPage};
use crate::state::{auth::AuthState, conversation::ConversationTree, ui::UiState};

/// Root application component.
///
/// Provides all shared state contexts, resolves the current session once,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let ui = RwSignal::new(UiState::default());
    let conversation = RwSignal::new(ConversationTree::new());

    provide_context(auth);
    provide_context(ui);
    provide_context(conversation);

    #[cfg(feature = "hydrate")]
    {
        let theme = crate::util::theme::read_preference();
        crate::util::theme::apply(theme);
        ui.update(|u| u.theme = theme);

        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            auth.update(|a| a.resolve(user));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/gptree.css"/>
        <Title text="GPTree"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("account") view=AccountPage/>
                <Route path=StaticSegment("") view=ConversationPage/>
            </Routes>
        </Router>
    }
}
