use std::ops::Index;

use pursuit_core::Point;

/// Index of a [`SearchNode`] in a [`NodeArena`], in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// The search root is always created first.
    pub const ROOT: NodeId = NodeId(0);
}

/// One visited cell of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub pos: Point,
    /// Steps taken from the start.
    pub cost: i32,
    /// Predecessor; `None` only for the root.
    pub parent: Option<NodeId>,
}

/// All nodes created by one search run.
///
/// Parent links always point to an earlier node, so they form a tree rooted
/// at [`NodeId::ROOT`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its id.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        debug_assert!(node.parent.is_none_or(|p| p.0 < self.nodes.len()));
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Node with id `id`, if it exists.
    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node was created.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove all nodes, keeping the allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Nodes in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> + '_ {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    #[inline]
    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_creation_order() {
        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode {
            pos: Point::new(1, 1),
            cost: 0,
            parent: None,
        });
        let child = arena.push(SearchNode {
            pos: Point::new(2, 1),
            cost: 1,
            parent: Some(root),
        });
        assert_eq!(root, NodeId::ROOT);
        assert_eq!(child, NodeId(1));
        assert_eq!(arena[child].parent, Some(root));
        assert_eq!(arena.len(), 2);
        assert!(arena.get(NodeId(2)).is_none());

        arena.clear();
        assert!(arena.is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn arena_round_trip() {
        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode {
            pos: Point::new(0, 0),
            cost: 0,
            parent: None,
        });
        arena.push(SearchNode {
            pos: Point::new(0, 1),
            cost: 1,
            parent: Some(root),
        });
        let json = serde_json::to_string(&arena).unwrap();
        let back: NodeArena = serde_json::from_str(&json).unwrap();
        assert_eq!(back, arena);
    }
}
