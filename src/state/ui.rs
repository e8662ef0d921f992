#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::conversation::NodeId;
use crate::util::theme::Theme;

/// UI state for theming and the message composer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    /// Message being edited; the composer then adds a sibling branch.
    pub editing: Option<NodeId>,
}
