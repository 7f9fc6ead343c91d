//! Sprtree is a library providing a bidirectional tree for combinatorial
//! tree algorithms, notably subtree prune and regraft (SPR) moves as used in
//! computational phylogenetics.
//!
//! Core functionality provided:
//! - Tree model: [Tree] stores nodes in an arena, addressed by dense
//!   [NodeId]s. Edges are reciprocal adjacency entries, so trees can be
//!   rooted or unrooted and children are simply "neighbors without parent".
//!   Each node carries a payload of the host's choosing. See [crate::model].
//! - Editing: contraction of edges and chains of degree-two nodes, trimming
//!   leaves and dangling roots, SPR moves and rerooting. See [crate::edit].
//! - Traversal: one depth-first engine with pre-order, in-order, post-order
//!   and Euler tour views, from the root or from any subtree.
//!   See [crate::traversal].
//!
//! Limitations:
//! - No parsing or writing of tree formats (e.g. Newick); build trees with
//!   [Tree::new_node] and [Tree::add_edge].
//! - Nodes are never deleted; edits leave isolated nodes behind.
//! - Not thread-safe for mutation; traversals borrow the tree immutably.
//!
//! # Example
//! ```
//! use sprtree::Tree;
//!
//! // Rooted tree ((a,b)x,c)r
//! let mut tree: Tree<&str> = Tree::new();
//! let r = tree.push_node("r");
//! let x = tree.push_node("x");
//! let a = tree.push_node("a");
//! let b = tree.push_node("b");
//! let c = tree.push_node("c");
//! tree.add_edge(r, x);
//! tree.add_edge(r, c);
//! tree.add_edge(x, a);
//! tree.add_edge(x, b);
//! tree.set_root(r).unwrap();
//!
//! // Prune a (with its parent x) and regraft it into the edge (r, c)
//! tree.spr(a, x, r, c).unwrap();
//! assert!(tree.has_edge(r, b));
//! assert!(tree.has_edge(x, c));
//!
//! let labels: Vec<_> = tree.preorder().map(|step| tree[step.node]).collect();
//! assert_eq!(labels, vec!["r", "b", "x", "a", "c"]);
//! ```

pub mod edit;
pub mod model;
pub mod traversal;

pub use model::{NO_NODE, NodeId, Tree, TreeError, TreeResult};
pub use traversal::{Step, Visit};
