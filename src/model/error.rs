//! Error type for structural tree operations.
//!
//! Every fallible mutation returns a [TreeResult]. Composite operations
//! (e.g. chain contraction, trimming a set of leaves) report the first
//! failing elementary step and keep all changes made before it.

use crate::model::tree::NodeId;
use thiserror::Error;

/// Result type of fallible tree operations.
pub type TreeResult<T> = Result<T, TreeError>;

// =#========================================================================#=
// TREE ERROR
// =#========================================================================#=
/// Precondition failures of tree mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The two nodes are not adjacent.
    #[error("no edge between nodes {0} and {1}")]
    MissingEdge(NodeId, NodeId),

    /// Only one direction of the edge is stored, i.e. reciprocity is broken.
    #[error("edge ({0}, {1}) is only stored at node {0}")]
    AsymmetricEdge(NodeId, NodeId),

    /// The node does not have the degree the operation requires.
    #[error("node {node} has degree {degree}, expected {expected}")]
    UnexpectedDegree {
        node: NodeId,
        degree: usize,
        expected: usize,
    },

    /// The operation is not allowed on the root.
    #[error("node {0} is the root")]
    IsRoot(NodeId),

    /// The operation requires a rooted tree.
    #[error("tree has no root")]
    Unrooted,

    /// The id does not address a node of this tree.
    #[error("node {0} does not exist")]
    NodeOutOfBounds(NodeId),
}
