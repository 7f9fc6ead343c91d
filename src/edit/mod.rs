//! Structural editing of a [Tree](crate::model::Tree).
//!
//! The algorithms are implemented as methods on [Tree](crate::model::Tree),
//! grouped by concern:
//! - [contract]: contract edges and chains of degree-two nodes
//! - [trim]: cut off leaves and a dangling root
//! - [spr]: subtree prune and regraft moves and rerooting
//!
//! All are built from [add_edge](crate::model::Tree::add_edge) and
//! [remove_edge](crate::model::Tree::remove_edge) only. Composite operations
//! stop at the first failing step without undoing earlier steps.

pub mod contract;
pub mod spr;
pub mod trim;
