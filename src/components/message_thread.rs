//! Active path of the conversation with per-message branch navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each message whose parent has alternatives carries a `BranchNavigator` for
//! that parent. The thread also captures `h` / `l` and applies them to the
//! deepest fork on screen.

use leptos::prelude::*;
use leptos::wasm_bindgen::JsCast;
use leptos::web_sys;

use crate::components::branch_navigator::BranchNavigator;
use crate::state::conversation::{ConversationTree, NodeId, Role};
use crate::state::ui::UiState;
use crate::util::branch_keys::{Modifiers, branch_key_action, is_editable_tag};

/// Scrollable list of the messages on the active path.
#[component]
pub fn MessageThread() -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationTree>>();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let modifiers = Modifiers { ctrl: ev.ctrl_key(), meta: ev.meta_key(), alt: ev.alt_key() };
        let editable_target = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|el| is_editable_tag(&el.tag_name()) || el.has_attribute("contenteditable"));
        let Some(step) = branch_key_action(&ev.key(), modifiers, editable_target) else {
            return;
        };
        let Some(fork) = conversation.with(ConversationTree::deepest_branch_point) else {
            return;
        };
        ev.prevent_default();
        conversation.update(|tree| {
            tree.step(fork, step);
        });
    };

    let rows = move || {
        conversation
            .with(ConversationTree::active_path)
            .into_iter()
            .map(|id| view! { <MessageRow node_id=id/> })
            .collect_view()
    };

    view! {
        <div class="message-thread" tabindex="0" on:keydown=on_keydown>
            <Show
                when=move || !conversation.with(ConversationTree::is_empty)
                fallback=|| view! { <p class="message-thread__empty">"Start a conversation below."</p> }
            >
                {rows}
            </Show>
        </div>
    }
}

#[component]
fn MessageRow(node_id: NodeId) -> impl IntoView {
    let conversation = expect_context::<RwSignal<ConversationTree>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let parent = conversation.with_untracked(|tree| tree.get(node_id).and_then(|node| node.parent));
    let siblings = Memo::new(move |_| {
        parent
            .and_then(|p| conversation.with(|tree| tree.branch_set(p)))
            .unwrap_or_default()
    });

    let role = move || conversation.with(|tree| tree.get(node_id).and_then(|node| node.role));
    let content = move || {
        conversation.with(|tree| tree.get(node_id).map(|node| node.content.clone()).unwrap_or_default())
    };
    let role_label = move || match role() {
        Some(Role::User) => "You",
        Some(Role::Assistant) => "GPTree",
        None => "",
    };
    let row_class = move || {
        let mut class = String::from("message");
        if role() == Some(Role::User) {
            class.push_str(" message--user");
        }
        if ui.with(|u| u.editing == Some(node_id)) {
            class.push_str(" message--editing");
        }
        class
    };

    let on_previous = Callback::new(move |()| {
        if let Some(p) = parent {
            conversation.update(|tree| {
                tree.select_previous(p);
            });
        }
    });
    let on_next = Callback::new(move |()| {
        if let Some(p) = parent {
            conversation.update(|tree| {
                tree.select_next(p);
            });
        }
    });

    view! {
        <div class=row_class>
            <div class="message__meta">
                <span class="message__role">{role_label}</span>
                <BranchNavigator
                    current_branch=Signal::derive(move || siblings.get().current_branch)
                    total_branches=Signal::derive(move || siblings.get().total_branches)
                    on_previous=on_previous
                    on_next=on_next
                    preview=Signal::derive(move || siblings.get().branch_preview)
                />
                <Show when=move || role() == Some(Role::User)>
                    <button
                        class="btn message__edit"
                        on:click=move |_| ui.update(|u| u.editing = Some(node_id))
                        title="Edit as a new branch"
                    >
                        "Edit"
                    </button>
                </Show>
            </div>
            <div class="message__content">{content}</div>
        </div>
    }
}
