//! Sidebar tree - arena of nodes built once from the rendered rows

use std::collections::HashMap;

use crate::error::{SidebarError, SidebarResult};
use crate::tree::node::{Disclosure, Node, NodeId, RowSpec};

/// The logical sidebar tree
///
/// Nodes live in an arena indexed by `NodeId`; parents are plain ids, so the
/// upward link is lookup-only. Only `disclosure`, `visible` and the selection
/// change after construction, and only through crate-private mutators.
#[derive(Debug, Clone, Default)]
pub struct SidebarTree {
    nodes: Vec<Node>,
    by_path: HashMap<String, NodeId>,
    roots: Vec<NodeId>,
    selected: Option<NodeId>,
}

impl SidebarTree {
    /// Build the tree from rows in document order
    ///
    /// A row's parent is the closest preceding row one level up.
    pub fn from_rows<I>(rows: I) -> SidebarResult<Self>
    where
        I: IntoIterator<Item = RowSpec>,
    {
        let mut tree = SidebarTree::default();
        // ancestry[l] is the most recent node seen at level l
        let mut ancestry: Vec<NodeId> = Vec::new();

        for row in rows {
            let malformed = |reason: String| SidebarError::MalformedRow {
                row: row.path.clone(),
                reason,
            };

            if tree.by_path.contains_key(&row.path) {
                return Err(malformed("duplicate id".to_string()));
            }
            if row.level > ancestry.len() {
                return Err(malformed(format!(
                    "level {} follows a row at level {}",
                    row.level,
                    ancestry.len() as isize - 1
                )));
            }
            ancestry.truncate(row.level);

            let parent = ancestry.last().copied();
            if let Some(parent_id) = parent {
                let parent_node = &tree.nodes[parent_id.0];
                if parent_node.disclosure.is_leaf() {
                    return Err(malformed(format!(
                        "parent '{}' is a leaf",
                        parent_node.path
                    )));
                }
            }

            let id = NodeId(tree.nodes.len());
            let visible = match parent {
                None => true,
                Some(p) => {
                    let p = &tree.nodes[p.0];
                    p.visible && p.disclosure == Disclosure::Expanded
                }
            };
            tree.nodes.push(Node {
                path: row.path.clone(),
                level: row.level,
                disclosure: row.state,
                parent,
                children: Vec::new(),
                visible,
            });
            tree.by_path.insert(row.path, id);
            match parent {
                Some(p) => tree.nodes[p.0].children.push(id),
                None => tree.roots.push(id),
            }
            ancestry.push(id);
        }

        log::debug!("built sidebar tree with {} nodes", tree.nodes.len());
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Look up a node by its fragment path
    pub fn find(&self, path: &str) -> Option<NodeId> {
        self.by_path.get(path).copied()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn get(&self, path: &str) -> SidebarResult<&Node> {
        self.find(path)
            .map(|id| self.node(id))
            .ok_or_else(|| SidebarError::UnknownNode(path.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn is_selected(&self, id: NodeId) -> bool {
        self.selected == Some(id)
    }

    /// Ancestors of `id`, nearest first
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.node(id).parent,
        }
    }

    /// All descendants of `id` in depth-first document order
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(id).children.iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.node(next).children.iter().rev().copied());
        }
        out
    }

    pub(crate) fn set_disclosure(&mut self, id: NodeId, state: Disclosure) {
        let node = &mut self.nodes[id.0];
        if node.disclosure.is_leaf() {
            return;
        }
        node.disclosure = state;
    }

    pub(crate) fn set_visible(&mut self, id: NodeId, visible: bool) {
        self.nodes[id.0].visible = visible;
    }

    /// Replace the selection, returning the previously selected node
    pub(crate) fn set_selected(&mut self, id: Option<NodeId>) -> Option<NodeId> {
        std::mem::replace(&mut self.selected, id)
    }
}

/// Iterator over a node's ancestors, nearest first
pub struct Ancestors<'a> {
    tree: &'a SidebarTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.node(current).parent;
        Some(current)
    }
}
