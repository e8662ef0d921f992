//! Previous/next controls over the alternatives at one conversation node.
//!
//! DESIGN
//! ======
//! The navigator owns nothing. It is a pure view over the caller's
//! `current_branch` / `total_branches` and reports clicks through callbacks;
//! the caller decides what selecting a branch means. Callers must keep
//! `current_branch < total_branches`; out-of-range input only disables the
//! edge buttons.

#[cfg(test)]
#[path = "branch_navigator_test.rs"]
mod branch_navigator_test;

use leptos::prelude::*;

use crate::util::branch_keys::BRANCH_KEY_HINT;

/// What the navigator shows for a given position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BranchNav {
    /// `"{current + 1} / {total}"`.
    pub label: String,
    pub can_previous: bool,
    pub can_next: bool,
}

/// Compute the navigator view; `None` means render nothing.
pub fn branch_nav(current_branch: usize, total_branches: usize) -> Option<BranchNav> {
    if total_branches <= 1 {
        return None;
    }
    Some(BranchNav {
        label: format!("{} / {}", current_branch + 1, total_branches),
        can_previous: current_branch > 0,
        can_next: current_branch + 1 < total_branches,
    })
}

/// Branch navigator: `‹ 2 / 3 ›` plus an optional preview of the selection.
#[component]
pub fn BranchNavigator(
    #[prop(into)] current_branch: Signal<usize>,
    #[prop(into)] total_branches: Signal<usize>,
    on_previous: Callback<()>,
    on_next: Callback<()>,
    #[prop(into)] preview: Signal<Option<String>>,
) -> impl IntoView {
    let nav = Memo::new(move |_| branch_nav(current_branch.get(), total_branches.get()));

    let body = move || {
        nav.get().map(|nav| {
            view! {
                <div class="branch-nav" role="group" aria-label="Branches">
                    <button
                        class="branch-nav__button branch-nav__button--previous"
                        disabled={!nav.can_previous}
                        on:click=move |_| on_previous.run(())
                        title="Previous branch (h)"
                    >
                        "‹"
                    </button>
                    <span class="branch-nav__label">{nav.label}</span>
                    <button
                        class="branch-nav__button branch-nav__button--next"
                        disabled={!nav.can_next}
                        on:click=move |_| on_next.run(())
                        title="Next branch (l)"
                    >
                        "›"
                    </button>
                    {move || {
                        preview
                            .get()
                            .map(|text| view! { <span class="branch-nav__preview">{text}</span> })
                    }}
                    <kbd class="branch-nav__hint">{BRANCH_KEY_HINT}</kbd>
                </div>
            }
        })
    };

    view! { {body} }
}
