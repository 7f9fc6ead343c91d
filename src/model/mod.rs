//! Data model of the bidirectional tree.
//!
//! # Tree representation
//! Trees are represented by [Tree], which uses the arena pattern to store
//! [Node] records. Each node holds an opaque payload and an
//! [AdjacencyList] of neighbor ids; nodes are referenced by [NodeId] only.
//!
//! | Type | Role |
//! |------|------|
//! | [AdjacencyList] | Unordered neighbor ids of one node |
//! | [Children] | Neighbors without a designated parent (borrowing view) |
//! | [Node] | Payload plus adjacency |
//! | [Tree] | Node arena, root marker and edge count |
//!
//! Fallible mutations report a [TreeError].

pub mod adjacency;
pub mod error;
pub mod node;
pub mod tree;

pub use adjacency::AdjacencyList;
pub use adjacency::Children;
pub use error::TreeError;
pub use error::TreeResult;
pub use node::Node;
pub use tree::NO_NODE;
pub use tree::NodeId;
pub use tree::Tree;
