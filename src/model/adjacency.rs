//! Neighbor storage of a single node and the parent-filtered view on it.
//!
//! * [AdjacencyList] - unordered list of neighbor ids, O(degree) removal
//! * [Children] - borrowing view that hides one designated parent id

use crate::model::tree::NodeId;
use std::slice;

// =#========================================================================#=
// ADJACENCY LIST
// =#========================================================================#=
/// Neighbors of one node, stored in insertion order.
///
/// Removal swaps the last entry into the freed slot, so the order is not
/// preserved after a [remove](AdjacencyList::remove).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyList {
    neighbors: Vec<NodeId>,
}

impl AdjacencyList {
    /// Creates an empty adjacency list.
    pub fn new() -> Self {
        AdjacencyList {
            neighbors: Vec::new(),
        }
    }

    /// Returns the number of stored neighbors.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` if there are no neighbors.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Appends `v` as neighbor; duplicates are not checked.
    pub fn insert(&mut self, v: NodeId) {
        self.neighbors.push(v);
    }

    /// Removes one occurrence of `v`.
    ///
    /// # Returns
    /// `true` if `v` was found (and removed), `false` otherwise.
    pub fn remove(&mut self, v: NodeId) -> bool {
        match self.neighbors.iter().position(|&u| u == v) {
            Some(pos) => {
                self.neighbors.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if `v` is a neighbor.
    pub fn contains(&self, v: NodeId) -> bool {
        self.neighbors.contains(&v)
    }

    /// Returns the first neighbor in storage order, if any.
    pub fn first(&self) -> Option<NodeId> {
        self.neighbors.first().copied()
    }

    /// Returns the neighbors as slice.
    pub fn as_slice(&self) -> &[NodeId] {
        &self.neighbors
    }

    /// Returns an iterator over the neighbors in storage order.
    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, NodeId>> {
        self.neighbors.iter().copied()
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = NodeId;
    type IntoIter = std::iter::Copied<slice::Iter<'a, NodeId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =#========================================================================#=
// CHILDREN
// =#========================================================================#=
/// Neighbors of a node without its parent.
///
/// Exactly one occurrence of `parent` is filtered out. If `parent` is not a
/// neighbor (e.g. [NO_NODE](crate::model::tree::NO_NODE)), all neighbors
/// are children.
#[derive(Debug, Clone, Copy)]
pub struct Children<'a> {
    neighbors: &'a [NodeId],
    parent: NodeId,
}

impl<'a> Children<'a> {
    /// Creates the view on `adjacency` that hides `parent`.
    pub fn new(adjacency: &'a AdjacencyList, parent: NodeId) -> Self {
        Children {
            neighbors: adjacency.as_slice(),
            parent,
        }
    }

    /// Returns the excluded parent id.
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// Returns the number of children.
    pub fn len(&self) -> usize {
        if self.neighbors.contains(&self.parent) {
            self.neighbors.len() - 1
        } else {
            self.neighbors.len()
        }
    }

    /// Returns `true` if there are no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `v` is a child.
    ///
    /// The parent is only a child if it is stored more than once, matching
    /// [iter](Children::iter).
    pub fn contains(&self, v: NodeId) -> bool {
        if v == self.parent {
            self.neighbors.iter().filter(|&&w| w == v).count() > 1
        } else {
            self.neighbors.contains(&v)
        }
    }

    /// Returns an iterator over the children in storage order.
    pub fn iter(&self) -> ChildrenIter<'a> {
        ChildrenIter {
            inner: self.neighbors.iter(),
            parent: self.parent,
            parent_skipped: false,
        }
    }
}

impl<'a> IntoIterator for Children<'a> {
    type Item = NodeId;
    type IntoIter = ChildrenIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over [Children], skipping the first occurrence of the parent.
#[derive(Debug, Clone)]
pub struct ChildrenIter<'a> {
    inner: slice::Iter<'a, NodeId>,
    parent: NodeId,
    parent_skipped: bool,
}

impl Iterator for ChildrenIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        for &v in self.inner.by_ref() {
            if !self.parent_skipped && v == self.parent {
                self.parent_skipped = true;
                continue;
            }
            return Some(v);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tree::NO_NODE;

    fn list(ids: &[NodeId]) -> AdjacencyList {
        let mut adj = AdjacencyList::new();
        for &v in ids {
            adj.insert(v);
        }
        adj
    }

    #[test]
    fn test_remove_swaps_last_into_place() {
        let mut adj = list(&[3, 5, 7, 9]);
        assert!(adj.remove(5));
        assert_eq!(adj.as_slice(), &[3, 9, 7]);
        assert!(!adj.remove(5));
        assert_eq!(adj.len(), 3);
    }

    #[test]
    fn test_children_skip_exactly_one_parent() {
        let adj = list(&[4, 2, 4, 8]);
        let children = Children::new(&adj, 4);
        assert_eq!(children.iter().collect::<Vec<_>>(), vec![2, 4, 8]);
        assert_eq!(children.len(), 3);
        assert!(children.contains(4));
        assert!(children.contains(8));
    }

    #[test]
    fn test_children_contains_agrees_with_iter() {
        let adj = list(&[4, 2, 4]);
        let children = Children::new(&adj, 4);
        for v in [2, 4, 7] {
            assert_eq!(children.contains(v), children.iter().any(|w| w == v), "node {v}");
        }
    }

    #[test]
    fn test_children_without_parent_are_all_neighbors() {
        let adj = list(&[1, 2, 3]);
        let children = Children::new(&adj, NO_NODE);
        assert_eq!(children.len(), 3);
        assert_eq!(children.iter().collect::<Vec<_>>(), vec![1, 2, 3]);

        let children = Children::new(&adj, 42);
        assert_eq!(children.len(), 3);
        assert!(!children.contains(42));
    }

    #[test]
    fn test_children_contains_excludes_parent() {
        let adj = list(&[1, 2]);
        let children = Children::new(&adj, 1);
        assert!(!children.contains(1));
        assert!(children.contains(2));
        assert!(!children.is_empty());
    }
}
