//! Branching conversation tree and its per-node branch selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every node remembers which of its children is on screen. That selection is
//! the only mutable branch state in the client: the navigator component reads
//! it through [`ConversationTree::branch_set`] and changes it exclusively via
//! [`ConversationTree::select_previous`] / [`ConversationTree::select_next`].
//!
//! A hidden root node sits above the first message so alternative openings
//! are ordinary siblings.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use std::collections::HashMap;

use uuid::Uuid;

pub type NodeId = Uuid;

/// Characters kept in a branch preview before it is cut with an ellipsis.
pub const BRANCH_PREVIEW_CHARS: usize = 80;

/// Author of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// Direction of a branch navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchStep {
    Previous,
    Next,
}

/// The alternatives under one node plus the selected index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BranchSet {
    pub total_branches: usize,
    /// Zero-based; `< total_branches` whenever `total_branches > 0`.
    pub current_branch: usize,
    /// Short summary of the selected branch.
    pub branch_preview: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConversationNode {
    pub id: NodeId,
    pub parent: Option<NodeId>,
    pub role: Option<Role>,
    pub content: String,
    children: Vec<NodeId>,
    selected_child: usize,
}

impl ConversationNode {
    fn new(id: NodeId, parent: Option<NodeId>, role: Option<Role>, content: String) -> Self {
        Self { id, parent, role, content, children: Vec::new(), selected_child: 0 }
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    fn selected(&self) -> Option<NodeId> {
        self.children.get(self.selected_child).copied()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConversationTree {
    root: NodeId,
    nodes: HashMap<NodeId, ConversationNode>,
}

impl Default for ConversationTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationTree {
    pub fn new() -> Self {
        let root = Uuid::nil();
        let mut nodes = HashMap::new();
        nodes.insert(root, ConversationNode::new(root, None, None, String::new()));
        Self { root, nodes }
    }

    /// The hidden node above the first message.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn get(&self, id: NodeId) -> Option<&ConversationNode> {
        self.nodes.get(&id)
    }

    /// Number of messages, not counting the hidden root.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add a message under `parent` and put it on screen.
    ///
    /// Returns `None` when `parent` is unknown.
    pub fn append(&mut self, parent: NodeId, role: Role, content: impl Into<String>) -> Option<NodeId> {
        let id = Uuid::new_v4();
        let parent_node = self.nodes.get_mut(&parent)?;
        parent_node.children.push(id);
        parent_node.selected_child = parent_node.children.len() - 1;
        self.nodes
            .insert(id, ConversationNode::new(id, Some(parent), Some(role), content.into()));
        Some(id)
    }

    /// Branch state of `id`'s children, or `None` for an unknown node.
    pub fn branch_set(&self, id: NodeId) -> Option<BranchSet> {
        let node = self.nodes.get(&id)?;
        let branch_preview = node
            .selected()
            .and_then(|child| self.nodes.get(&child))
            .map(|child| preview(&child.content));
        Some(BranchSet {
            total_branches: node.children.len(),
            current_branch: node.selected_child,
            branch_preview,
        })
    }

    /// Select the previous sibling under `id`. Returns whether anything changed.
    pub fn select_previous(&mut self, id: NodeId) -> bool {
        self.step(id, BranchStep::Previous)
    }

    /// Select the next sibling under `id`. Returns whether anything changed.
    pub fn select_next(&mut self, id: NodeId) -> bool {
        self.step(id, BranchStep::Next)
    }

    /// Move the selection under `id` one step, clamped at both ends.
    pub fn step(&mut self, id: NodeId, step: BranchStep) -> bool {
        let Some(node) = self.nodes.get_mut(&id) else {
            return false;
        };
        let next = match step {
            BranchStep::Previous => node.selected_child.checked_sub(1),
            BranchStep::Next => Some(node.selected_child + 1).filter(|i| *i < node.children.len()),
        };
        match next {
            Some(index) => {
                node.selected_child = index;
                true
            }
            None => false,
        }
    }

    /// Messages on screen, from the first message down to the active leaf.
    pub fn active_path(&self) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut cursor = self.nodes.get(&self.root).and_then(ConversationNode::selected);
        while let Some(id) = cursor {
            path.push(id);
            cursor = self.nodes.get(&id).and_then(ConversationNode::selected);
        }
        path
    }

    /// Last message on screen, or the root for an empty conversation.
    pub fn active_leaf(&self) -> NodeId {
        self.active_path().last().copied().unwrap_or(self.root)
    }

    /// Deepest node on the active path (root included) with more than one child.
    ///
    /// Keyboard navigation acts on this node.
    pub fn deepest_branch_point(&self) -> Option<NodeId> {
        std::iter::once(self.root)
            .chain(self.active_path())
            .filter(|id| self.nodes.get(id).is_some_and(|n| n.children.len() > 1))
            .last()
    }

    /// Remove `id` and its subtree. The hidden root cannot be removed.
    ///
    /// The parent's selection keeps pointing at the same sibling when possible
    /// and is clamped into range otherwise.
    pub fn remove(&mut self, id: NodeId) -> bool {
        if id == self.root {
            return false;
        }
        let Some(parent) = self.nodes.get(&id).and_then(|n| n.parent) else {
            return false;
        };

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(&next) {
                stack.extend(node.children);
            }
        }

        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            if let Some(index) = parent_node.children.iter().position(|c| *c == id) {
                parent_node.children.remove(index);
                if index < parent_node.selected_child {
                    parent_node.selected_child -= 1;
                }
            }
            let last = parent_node.children.len().saturating_sub(1);
            parent_node.selected_child = parent_node.selected_child.min(last);
        }
        true
    }
}

/// Parent for the next composed message.
///
/// Editing a message adds a sibling beside it; otherwise the message
/// continues the active leaf.
pub fn composer_parent(tree: &ConversationTree, editing: Option<NodeId>) -> NodeId {
    editing
        .and_then(|id| tree.get(id))
        .and_then(|node| node.parent)
        .unwrap_or_else(|| tree.active_leaf())
}

/// Single-line summary of `content`, cut at [`BRANCH_PREVIEW_CHARS`].
pub fn preview(content: &str) -> String {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= BRANCH_PREVIEW_CHARS {
        return flat;
    }
    let mut cut: String = flat.chars().take(BRANCH_PREVIEW_CHARS).collect();
    cut.push('…');
    cut
}
