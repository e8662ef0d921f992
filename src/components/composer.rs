//! Message composer. Continues the active leaf, or adds a sibling branch when
//! a message is being edited.

use leptos::prelude::*;

use crate::state::conversation::{ConversationTree, Role, composer_parent};
use crate::state::ui::UiState;

#[component]
pub fn Composer() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationTree>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let draft = RwSignal::new(String::new());

    // Prefill with the edited message's text.
    Effect::new(move || {
        let Some(id) = ui.with(|u| u.editing) else {
            return;
        };
        if let Some(text) = conversation.with_untracked(|tree| tree.get(id).map(|node| node.content.clone())) {
            draft.set(text);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get().trim().to_owned();
        if text.is_empty() {
            return;
        }
        let editing = ui.with(|u| u.editing);
        conversation.update(|tree| {
            let parent = composer_parent(tree, editing);
            tree.append(parent, Role::User, text);
        });
        draft.set(String::new());
        ui.update(|u| u.editing = None);
    };

    let on_cancel = move |_| {
        ui.update(|u| u.editing = None);
        draft.set(String::new());
    };

    view! {
        <form class="composer" on:submit=on_submit>
            <Show when=move || ui.with(|u| u.editing.is_some())>
                <div class="composer__editing">
                    <span>"Editing creates a new branch"</span>
                    <button type="button" class="btn composer__cancel" on:click=on_cancel>
                        "Cancel"
                    </button>
                </div>
            </Show>
            <textarea
                class="composer__input"
                placeholder="Message GPTree"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            ></textarea>
            <button
                type="submit"
                class="btn composer__send"
                disabled=move || draft.with(|d| d.trim().is_empty())
            >
                "Send"
            </button>
        </form>
    }
}
