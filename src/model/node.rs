//! Node record of the tree arena.
use crate::model::adjacency::AdjacencyList;

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node in a [Tree](crate::model::tree::Tree) arena.
///
/// A node consists of
/// - a **payload** (`value`) supplied and interpreted by the host only, and
/// - its **adjacency**, the ids of all neighbors.
///
/// The node's id is its position in the arena and thus not stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node<T> {
    value: T,
    adjacency: AdjacencyList,
}

impl<T> Node<T> {
    /// Creates a new isolated node carrying `value`.
    pub fn new(value: T) -> Self {
        Node {
            value,
            adjacency: AdjacencyList::new(),
        }
    }

    /// Returns a reference to the payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns a mutable reference to the payload.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Returns the neighbors of this node.
    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }

    pub(crate) fn adjacency_mut(&mut self) -> &mut AdjacencyList {
        &mut self.adjacency
    }

    /// Returns the number of neighbors.
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns `true` if the node has no neighbors.
    pub fn is_isolated(&self) -> bool {
        self.adjacency.is_empty()
    }
}
