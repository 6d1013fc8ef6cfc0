//! Selection and ancestor reveal

use crate::disclosure;
use crate::render::{RowChange, Transition};
use crate::tree::{Disclosure, SidebarTree};

/// Expand the ancestors of `path` and make it the selected node
///
/// Unknown paths are ignored. Calling this twice with the same path leaves
/// the tree exactly as after the first call.
pub fn reveal(tree: &mut SidebarTree, path: &str) -> Transition {
    let mut transition = Transition::new();
    let Some(target) = tree.find(path) else {
        log::debug!("reveal: no sidebar node for '{}'", path);
        return transition;
    };

    let mut chain: Vec<_> = tree.ancestors(target).collect();
    chain.reverse();

    for ancestor in chain {
        if tree.node(ancestor).disclosure() == Disclosure::Collapsed {
            transition.extend(disclosure::toggle(tree, ancestor));
            continue;
        }
        // Expanded ancestors keep their state, but a child hidden by an
        // earlier collapse further up still has to come back into view.
        let hidden: Vec<_> = tree
            .node(ancestor)
            .children()
            .iter()
            .copied()
            .filter(|&child| !tree.node(child).is_visible())
            .collect();
        for child in hidden {
            tree.set_visible(child, true);
            transition.push(RowChange::Visibility(child, true));
        }
    }

    let previous = tree.set_selected(Some(target));
    if previous != Some(target) {
        if let Some(previous) = previous {
            transition.push(RowChange::Selection(previous, false));
        }
        transition.push(RowChange::Selection(target, true));
        log::debug!("selected '{}'", path);
    }
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
            RowSpec::new("e", 0, Leaf),
        ])
        .unwrap()
    }

    #[test]
    fn test_reveal_expands_chain() {
        let mut tree = tree();
        reveal(&mut tree, "d");
        let d = tree.find("d").unwrap();
        assert_eq!(tree.get("a").unwrap().disclosure(), Expanded);
        assert_eq!(tree.get("c").unwrap().disclosure(), Expanded);
        assert!(tree.node(d).is_visible());
        assert_eq!(tree.selected(), Some(d));
    }

    #[test]
    fn test_reveal_moves_selection() {
        let mut tree = tree();
        reveal(&mut tree, "b");
        let transition = reveal(&mut tree, "e");
        let (b, e) = (tree.find("b").unwrap(), tree.find("e").unwrap());
        assert_eq!(tree.selected(), Some(e));
        assert_eq!(
            transition.changes(),
            &[RowChange::Selection(b, false), RowChange::Selection(e, true)]
        );
    }

    #[test]
    fn test_reveal_twice_is_stable() {
        let mut tree = tree();
        reveal(&mut tree, "d");
        let second = reveal(&mut tree, "d");
        assert!(second.is_empty());
    }

    #[test]
    fn test_reveal_unknown_is_noop() {
        let mut tree = tree();
        reveal(&mut tree, "b");
        let transition = reveal(&mut tree, "https://example.com/");
        assert!(transition.is_empty());
        assert_eq!(tree.selected(), tree.find("b"));
    }

    #[test]
    fn test_reveal_under_stale_expanded_ancestor() {
        let mut tree = SidebarTree::from_rows([
            RowSpec::new("a", 0, Collapsed),
            RowSpec::new("c", 1, Expanded),
            RowSpec::new("d", 2, Leaf),
        ])
        .unwrap();
        reveal(&mut tree, "d");
        assert_eq!(tree.get("c").unwrap().disclosure(), Expanded);
        assert!(tree.get("d").unwrap().is_visible());
    }
}
