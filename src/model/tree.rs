//! Provides the bidirectional tree container.
//!
//! * [`Tree<T>`] - Main tree structure using the arena pattern, generic over
//!   the per-node payload `T`.
//! * [NodeId] as type used to index nodes in the tree
//! * [NO_NODE] as the one "no node" sentinel
//!
//! The editing algorithms live in [crate::edit], the traversals in
//! [crate::traversal]; both only use the primitives of this module.

use crate::model::adjacency::{AdjacencyList, Children};
use crate::model::error::{TreeError, TreeResult};
use crate::model::node::Node;
use std::collections::VecDeque;
use std::ops::Range;

/// Index of a node in a tree (arena).
pub type NodeId = usize;

/// Sentinel for "no node": unset root, or no parent.
pub const NO_NODE: NodeId = usize::MAX;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// An undirected tree (or forest) represented using the arena pattern
/// on [Node].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeId].
/// An edge is stored as two reciprocal adjacency entries and has no identity
/// of its own.
///
/// # Structure
/// - Node ids are dense and append-only; they are never reused.
/// - Nodes are never removed. Editing operations disconnect nodes instead,
///   which then remain as isolated "orphans".
/// - A root may be designated, in which case children are the neighbors
///   without the parent. Without root the tree is unrooted.
/// - The payload `T` is opaque to the tree.
///
/// # Example
/// ```
/// use sprtree::Tree;
///
/// let mut tree: Tree<()> = Tree::new();
/// let root = tree.new_node();
/// let a = tree.new_node();
/// let b = tree.new_node();
/// tree.add_edge(root, a);
/// tree.add_edge(root, b);
/// tree.set_root(root).unwrap();
///
/// assert_eq!(tree.edge_count(), 2);
/// assert!(tree.is_leaf(a));
/// assert_eq!(tree.children_vec(root, sprtree::NO_NODE), vec![a, b]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node<T>>,

    /// Index of the root, or [NO_NODE] if unrooted
    root: NodeId,

    /// Number of edges, i.e. half the sum of all degrees
    edge_count: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree::new()
    }
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl<T> Tree<T> {
    /// Creates a new empty, unrooted tree.
    pub fn new() -> Self {
        Tree {
            nodes: Vec::new(),
            root: NO_NODE,
            edge_count: 0,
        }
    }

    /// Creates a new empty tree with space reserved for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            nodes: Vec::with_capacity(capacity),
            root: NO_NODE,
            edge_count: 0,
        }
    }

    /// Reserves space for at least `additional` more nodes.
    pub fn reserve_nodes(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Removes all nodes and edges and unsets the root.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = NO_NODE;
        self.edge_count = 0;
    }

    /// Returns `true` if the tree contains no nodes (and thus no edges).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of nodes, including isolated ones.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Adds a new isolated node carrying `value` and returns its id.
    pub fn push_node(&mut self, value: T) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(value));
        id
    }

    /// Adds a new isolated node with default payload and returns its id.
    pub fn new_node(&mut self) -> NodeId
    where
        T: Default,
    {
        self.push_node(T::default())
    }

    /// Returns a reference to the node record with id `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn node(&self, v: NodeId) -> &Node<T> {
        &self.nodes[v]
    }

    /// Returns a reference to the payload of node `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn value(&self, v: NodeId) -> &T {
        self.nodes[v].value()
    }

    /// Returns a mutable reference to the payload of node `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn value_mut(&mut self, v: NodeId) -> &mut T {
        self.nodes[v].value_mut()
    }

    // ------------------------------------------------------------------------
    // Root
    // ------------------------------------------------------------------------
    /// Returns the root, or `None` if the tree is unrooted.
    pub fn root(&self) -> Option<NodeId> {
        if self.root == NO_NODE {
            None
        } else {
            Some(self.root)
        }
    }

    /// Makes `v` the root of this tree.
    ///
    /// # Errors
    /// [TreeError::NodeOutOfBounds] if `v` is not a node of this tree.
    pub fn set_root(&mut self, v: NodeId) -> TreeResult<()> {
        if v >= self.nodes.len() {
            return Err(TreeError::NodeOutOfBounds(v));
        }
        self.root = v;
        Ok(())
    }

    /// Unsets the root, making the tree unrooted.
    pub fn unroot(&mut self) {
        self.root = NO_NODE;
    }

    /// Returns `true` if a root is set.
    pub fn is_rooted(&self) -> bool {
        self.root != NO_NODE
    }

    /// Returns `true` if no root is set.
    pub fn is_unrooted(&self) -> bool {
        self.root == NO_NODE
    }

    // ------------------------------------------------------------------------
    // Adjacency and children
    // ------------------------------------------------------------------------
    /// Returns the neighbors of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn adjacent(&self, v: NodeId) -> &AdjacencyList {
        self.nodes[v].adjacency()
    }

    /// Returns the neighbors of `v` as new vector.
    pub fn adjacent_vec(&self, v: NodeId) -> Vec<NodeId> {
        self.adjacent(v).iter().collect()
    }

    /// Writes the neighbors of `v` to the front of `out`.
    ///
    /// # Returns
    /// The number of ids written.
    ///
    /// # Panics
    /// Panics if `out` is shorter than the degree of `v`.
    pub fn adjacent_into(&self, v: NodeId, out: &mut [NodeId]) -> usize {
        let neighbors = self.adjacent(v).as_slice();
        out[..neighbors.len()].copy_from_slice(neighbors);
        neighbors.len()
    }

    /// Returns the children of `v`, i.e. its neighbors without `parent`.
    ///
    /// Pass [NO_NODE] as `parent` to get all neighbors.
    pub fn children(&self, v: NodeId, parent: NodeId) -> Children<'_> {
        Children::new(self.adjacent(v), parent)
    }

    /// Returns the children of `v` (neighbors without `parent`) as new vector.
    pub fn children_vec(&self, v: NodeId, parent: NodeId) -> Vec<NodeId> {
        self.children(v, parent).iter().collect()
    }

    /// Writes the children of `v` (neighbors without `parent`) to the front
    /// of `out`.
    ///
    /// # Returns
    /// The number of ids written.
    ///
    /// # Panics
    /// Panics if `out` is shorter than the number of children.
    pub fn children_into(&self, v: NodeId, parent: NodeId, out: &mut [NodeId]) -> usize {
        let mut written = 0;
        for child in self.children(v, parent) {
            out[written] = child;
            written += 1;
        }
        written
    }

    /// Returns the degree of `v`.
    pub fn degree(&self, v: NodeId) -> usize {
        self.nodes[v].degree()
    }

    /// Returns `true` if `v` has at most one neighbor (isolated nodes count).
    pub fn is_leaf(&self, v: NodeId) -> bool {
        self.degree(v) <= 1
    }

    /// Returns `true` if `v` and `u` are adjacent.
    pub fn has_edge(&self, v: NodeId, u: NodeId) -> bool {
        self.adjacent(v).contains(u)
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------
    /// Connects `v` and `u` by an edge. Does not check for an existing edge.
    ///
    /// # Panics
    /// Panics if `v` or `u` is out of bounds.
    pub fn add_edge(&mut self, v: NodeId, u: NodeId) {
        self.nodes[v].adjacency_mut().insert(u);
        self.nodes[u].adjacency_mut().insert(v);
        self.edge_count += 1;
    }

    /// Removes the edge between `v` and `u`.
    ///
    /// # Errors
    /// - [TreeError::MissingEdge] if `v` does not list `u` as neighbor
    /// - [TreeError::AsymmetricEdge] if only `v` lists `u`
    ///
    /// In both cases the tree is left unchanged.
    pub fn remove_edge(&mut self, v: NodeId, u: NodeId) -> TreeResult<()> {
        if !self.has_edge(v, u) {
            return Err(TreeError::MissingEdge(v, u));
        }
        if !self.has_edge(u, v) {
            return Err(TreeError::AsymmetricEdge(v, u));
        }
        self.nodes[v].adjacency_mut().remove(u);
        self.nodes[u].adjacency_mut().remove(v);
        self.edge_count -= 1;
        Ok(())
    }

    /// Removes all edges incident to `v`. The node itself stays in the tree.
    pub fn disconnect_node(&mut self, v: NodeId) -> TreeResult<()> {
        while let Some(u) = self.adjacent(v).first() {
            self.remove_edge(v, u)?;
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Node iterators
    // ------------------------------------------------------------------------
    /// Returns all node ids, including isolated nodes.
    pub fn nodes(&self) -> Range<NodeId> {
        0..self.nodes.len()
    }

    /// Returns an iterator over all nodes with degree at most one.
    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().filter(|&v| self.is_leaf(v))
    }

    /// Returns an iterator over all nodes with degree at least two.
    pub fn internal_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().filter(|&v| !self.is_leaf(v))
    }

    // ------------------------------------------------------------------------
    // Connectivity
    // ------------------------------------------------------------------------
    /// Returns the number of connected components.
    ///
    /// Isolated nodes count as components of their own; an empty tree has none.
    pub fn components(&self) -> usize {
        let mut visited = vec![false; self.nodes.len()];
        let mut queue = VecDeque::new();
        let mut count = 0;

        for seed in self.nodes() {
            if visited[seed] {
                continue;
            }
            count += 1;
            visited[seed] = true;
            queue.push_back(seed);

            while let Some(v) = queue.pop_front() {
                for u in self.adjacent(v) {
                    if !visited[u] {
                        visited[u] = true;
                        queue.push_back(u);
                    }
                }
            }
        }

        count
    }

    /// Returns `true` if all nodes form one connected component.
    ///
    /// An empty tree is considered connected.
    pub fn is_connected(&self) -> bool {
        self.components() <= 1
    }

    // ------------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------------
    /// Validates the structure of the tree.
    ///
    /// Checks:
    /// - All neighbor ids are within bounds
    /// - Each adjacency entry is mirrored by the neighbor (counting multiplicity)
    /// - The edge count equals half the sum of all degrees
    /// - The root, if set, is within bounds
    ///
    /// # Returns
    /// `true` if tree is valid, `false` otherwise
    pub fn is_valid(&self) -> bool {
        if self.root != NO_NODE && self.root >= self.nodes.len() {
            return false;
        }

        let mut degree_sum = 0;
        for v in self.nodes() {
            let adjacency = self.adjacent(v);
            degree_sum += adjacency.len();

            for u in adjacency {
                if u >= self.nodes.len() {
                    return false;
                }
                let forward = adjacency.iter().filter(|&w| w == u).count();
                let backward = self.adjacent(u).iter().filter(|&w| w == v).count();
                if forward != backward {
                    return false;
                }
            }
        }

        degree_sum == 2 * self.edge_count
    }
}

impl<T> std::ops::Index<NodeId> for Tree<T> {
    type Output = T;

    fn index(&self, index: NodeId) -> &Self::Output {
        self.value(index)
    }
}

impl<T> std::ops::IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, index: NodeId) -> &mut Self::Output {
        self.value_mut(index)
    }
}
