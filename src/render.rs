//! Row rendering as a derived step
//!
//! State transitions report what changed as `RowChange`s; a `RowRenderer`
//! turns those into whatever the host displays (DOM attributes and classes
//! in the browser, a log in tests).

use crate::tree::{Node, NodeId, SidebarTree};

/// A single render-relevant change to one row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowChange {
    /// The row's disclosure hint must follow its new state
    Disclosure(NodeId),
    Visibility(NodeId, bool),
    Selection(NodeId, bool),
}

/// Ordered list of row changes produced by one operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transition {
    changes: Vec<RowChange>,
}

impl Transition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, change: RowChange) {
        self.changes.push(change);
    }

    pub fn extend(&mut self, other: Transition) {
        self.changes.extend(other.changes);
    }

    pub fn changes(&self) -> &[RowChange] {
        &self.changes
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Nodes made visible, in order
    pub fn shown(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.changes.iter().filter_map(|c| match *c {
            RowChange::Visibility(id, true) => Some(id),
            _ => None,
        })
    }

    /// Nodes hidden, in order
    pub fn hidden(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.changes.iter().filter_map(|c| match *c {
            RowChange::Visibility(id, false) => Some(id),
            _ => None,
        })
    }
}

/// Applies row state to the host display
///
/// Every method must be idempotent: applying the same state twice leaves the
/// row as after the first call.
pub trait RowRenderer {
    fn render_disclosure(&mut self, node: &Node);
    fn render_visibility(&mut self, node: &Node);
    fn render_selection(&mut self, node: &Node, selected: bool);
}

/// Apply a transition against the current tree state
pub fn apply<R: RowRenderer + ?Sized>(
    renderer: &mut R,
    tree: &SidebarTree,
    transition: &Transition,
) {
    for change in transition.changes() {
        match *change {
            RowChange::Disclosure(id) => renderer.render_disclosure(tree.node(id)),
            RowChange::Visibility(id, _) => renderer.render_visibility(tree.node(id)),
            RowChange::Selection(id, selected) => {
                renderer.render_selection(tree.node(id), selected)
            }
        }
    }
}

/// Render every row from scratch, used once at startup
pub fn sync_all<R: RowRenderer + ?Sized>(renderer: &mut R, tree: &SidebarTree) {
    for (id, node) in tree.iter() {
        renderer.render_disclosure(node);
        renderer.render_visibility(node);
        renderer.render_selection(node, tree.is_selected(id));
    }
}
