//! Keyboard binding for branch navigation.
//!
//! `h` steps to the previous branch and `l` to the next one, vi-style. The
//! navigator component only advertises the binding; the conversation thread
//! captures the keys and routes them through [`branch_key_action`].

#[cfg(test)]
#[path = "branch_keys_test.rs"]
mod branch_keys_test;

use crate::state::conversation::BranchStep;

pub const PREVIOUS_KEY: &str = "h";
pub const NEXT_KEY: &str = "l";

/// Hint shown next to the navigator controls.
pub const BRANCH_KEY_HINT: &str = "h / l";

/// Modifier keys held during a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl Modifiers {
    fn any(self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

/// Whether an element with this tag name accepts typed text.
pub fn is_editable_tag(tag: &str) -> bool {
    ["INPUT", "TEXTAREA", "SELECT"].iter().any(|t| tag.eq_ignore_ascii_case(t))
}

/// Map a `KeyboardEvent.key` value to a branch step.
///
/// Chorded presses and presses typed into an editable element are left
/// alone so text entry and browser shortcuts keep working.
pub fn branch_key_action(key: &str, modifiers: Modifiers, editable_target: bool) -> Option<BranchStep> {
    if editable_target || modifiers.any() {
        return None;
    }
    match key {
        PREVIOUS_KEY => Some(BranchStep::Previous),
        NEXT_KEY => Some(BranchStep::Next),
        _ => None,
    }
}
