//! Selection: the node currently chosen in the console.
//!
//! Invariant: a selection is either empty or names a node present in the
//! last-fetched list. The only ways to build a non-empty selection go
//! through a node list, so the invariant is checked at construction.

use crate::node::Node;

/// The currently selected node identifier, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection(Option<String>);

impl Selection {
    /// The empty selection.
    #[must_use]
    pub fn none() -> Self {
        Self(None)
    }

    /// Select `node` if it is present in `nodes`.
    #[must_use]
    pub fn of(nodes: &[Node], node: &str) -> Option<Self> {
        nodes
            .iter()
            .any(|n| n.node == node)
            .then(|| Self(Some(node.to_string())))
    }

    /// Selection to use after `nodes` replaced the cached list: the current
    /// node when it is still listed, otherwise the first node, otherwise
    /// nothing.
    #[must_use]
    pub fn reconcile(&self, nodes: &[Node]) -> Self {
        self.node()
            .and_then(|current| Self::of(nodes, current))
            .unwrap_or_else(|| Self(nodes.first().map(|n| n.node.clone())))
    }

    /// The selected node identifier.
    #[must_use]
    pub fn node(&self) -> Option<&str> {
        self.0.as_deref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Look the selected node up in `nodes`.
    #[must_use]
    pub fn find<'a>(&self, nodes: &'a [Node]) -> Option<&'a Node> {
        let id = self.node()?;
        nodes.iter().find(|n| n.node == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[&str]) -> Vec<Node> {
        ids.iter().map(|id| Node::new(*id)).collect()
    }

    #[test]
    fn should_default_to_first_node_when_empty() {
        let list = nodes(&["a", "b"]);
        let sel = Selection::none().reconcile(&list);
        assert_eq!(sel.node(), Some("a"));
    }

    #[test]
    fn should_preserve_selection_when_node_still_listed() {
        let list = nodes(&["a", "b"]);
        let sel = Selection::of(&list, "b").unwrap();
        assert_eq!(sel.reconcile(&nodes(&["b", "c"])).node(), Some("b"));
    }

    #[test]
    fn should_fall_back_to_first_node_when_selected_node_disappears() {
        let sel = Selection::of(&nodes(&["a", "b"]), "b").unwrap();
        assert_eq!(sel.reconcile(&nodes(&["c", "d"])).node(), Some("c"));
    }

    #[test]
    fn should_become_empty_when_list_is_empty() {
        let sel = Selection::of(&nodes(&["a"]), "a").unwrap();
        assert!(sel.reconcile(&[]).is_empty());
    }

    #[test]
    fn should_refuse_to_select_unknown_node() {
        assert!(Selection::of(&nodes(&["a"]), "zzz").is_none());
    }

    #[test]
    fn should_find_selected_node() {
        let list = nodes(&["a", "b"]);
        let sel = Selection::of(&list, "b").unwrap();
        assert_eq!(sel.find(&list).map(|n| n.node.as_str()), Some("b"));
        assert!(Selection::none().find(&list).is_none());
    }
}
