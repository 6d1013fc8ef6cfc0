//! Disclosure engine - expand/collapse transitions
//!
//! Expanding is shallow: only direct children are shown and their own states
//! are kept. Collapsing is deep: every descendant is hidden and forced back
//! to `Collapsed`, so re-expanding a branch always starts from a folded view.

use crate::render::{RowChange, Transition};
use crate::tree::{Disclosure, NodeId, SidebarTree};

/// Flip a node between `Expanded` and `Collapsed`
///
/// Leaves are left alone and yield an empty transition.
pub fn toggle(tree: &mut SidebarTree, id: NodeId) -> Transition {
    match tree.node(id).disclosure() {
        Disclosure::Leaf => Transition::new(),
        Disclosure::Collapsed => expand(tree, id),
        Disclosure::Expanded => collapse(tree, id),
    }
}

fn expand(tree: &mut SidebarTree, id: NodeId) -> Transition {
    let mut transition = Transition::new();
    tree.set_disclosure(id, Disclosure::Expanded);
    transition.push(RowChange::Disclosure(id));

    // a node folded away under a collapsed ancestor keeps its children hidden
    if tree.node(id).is_visible() {
        let children = tree.node(id).children().to_vec();
        for child in children {
            tree.set_visible(child, true);
            transition.push(RowChange::Visibility(child, true));
        }
    }

    log::debug!("expanded '{}'", tree.node(id).path());
    transition
}

fn collapse(tree: &mut SidebarTree, id: NodeId) -> Transition {
    let mut transition = Transition::new();
    tree.set_disclosure(id, Disclosure::Collapsed);
    transition.push(RowChange::Disclosure(id));

    for descendant in tree.descendants(id) {
        let node = tree.node(descendant);
        let was_visible = node.is_visible();
        if node.disclosure() == Disclosure::Expanded {
            tree.set_disclosure(descendant, Disclosure::Collapsed);
            transition.push(RowChange::Disclosure(descendant));
        }
        if was_visible {
            tree.set_visible(descendant, false);
            transition.push(RowChange::Visibility(descendant, false));
        }
    }

    log::debug!("collapsed '{}'", tree.node(id).path());
    transition
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::RowSpec;
    use Disclosure::*;

    fn tree() -> SidebarTree {
        SidebarTree::from_rows([
            RowSpec::new("a", 0, Collapsed),
            RowSpec::new("b", 1, Leaf),
            RowSpec::new("c", 1, Collapsed),
            RowSpec::new("d", 2, Leaf),
        ])
        .unwrap()
    }

    fn id(tree: &SidebarTree, path: &str) -> NodeId {
        tree.find(path).unwrap()
    }

    #[test]
    fn test_leaf_toggle_is_noop() {
        let mut tree = tree();
        let b = id(&tree, "b");
        let transition = toggle(&mut tree, b);
        assert!(transition.is_empty());
        assert_eq!(tree.node(b).disclosure(), Leaf);
    }

    #[test]
    fn test_expand_is_shallow() {
        let mut tree = tree();
        let (a, b, c, d) = (id(&tree, "a"), id(&tree, "b"), id(&tree, "c"), id(&tree, "d"));

        let transition = toggle(&mut tree, a);
        assert_eq!(tree.node(a).disclosure(), Expanded);
        assert_eq!(transition.shown().collect::<Vec<_>>(), vec![b, c]);
        assert!(tree.node(b).is_visible());
        assert!(tree.node(c).is_visible());
        assert!(!tree.node(d).is_visible());
    }

    #[test]
    fn test_expand_keeps_child_state() {
        // c starts expanded under a collapsed a: re-showing c must not show d
        let mut tree = SidebarTree::from_rows([
            RowSpec::new("a", 0, Collapsed),
            RowSpec::new("c", 1, Expanded),
            RowSpec::new("d", 2, Leaf),
        ])
        .unwrap();
        let (a, c, d) = (id(&tree, "a"), id(&tree, "c"), id(&tree, "d"));

        toggle(&mut tree, a);
        assert_eq!(tree.node(c).disclosure(), Expanded);
        assert!(tree.node(c).is_visible());
        assert!(!tree.node(d).is_visible());
    }

    #[test]
    fn test_collapse_is_deep() {
        let mut tree = tree();
        let (a, b, c, d) = (id(&tree, "a"), id(&tree, "b"), id(&tree, "c"), id(&tree, "d"));
        toggle(&mut tree, a);
        toggle(&mut tree, c);
        assert!(tree.node(d).is_visible());

        let transition = toggle(&mut tree, a);
        assert_eq!(tree.node(a).disclosure(), Collapsed);
        assert_eq!(tree.node(c).disclosure(), Collapsed);
        assert_eq!(tree.node(b).disclosure(), Leaf);
        assert_eq!(transition.hidden().collect::<Vec<_>>(), vec![b, c, d]);
        assert!(transition.changes().contains(&RowChange::Disclosure(c)));
        assert!(!transition.changes().contains(&RowChange::Disclosure(b)));
    }

    #[test]
    fn test_toggle_hidden_node_keeps_descendants_hidden() {
        let mut tree = tree();
        let (a, c, d) = (id(&tree, "a"), id(&tree, "c"), id(&tree, "d"));

        // c is hidden under the collapsed a
        let transition = toggle(&mut tree, c);
        assert_eq!(tree.node(c).disclosure(), Expanded);
        assert_eq!(tree.node(a).disclosure(), Collapsed);
        assert!(!tree.node(c).is_visible());
        assert!(!tree.node(d).is_visible());
        assert_eq!(transition.changes(), &[RowChange::Disclosure(c)]);

        // folding it back is still a plain state flip
        toggle(&mut tree, c);
        assert_eq!(tree.node(c).disclosure(), Collapsed);
        assert!(!tree.node(d).is_visible());
    }
}
