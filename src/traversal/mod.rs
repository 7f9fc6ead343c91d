//! Traversals of a [Tree].
//!
//! All traversals share one engine, [DepthFirst], which walks the tree with an
//! explicit stack and yields a [Step] per visit. The views in [views] filter
//! that stream into pre-order, in-order, post-order and Euler tour.
//!
//! Every traversal can start
//! - at the root of the tree (e.g. [Tree::preorder]), or
//! - at any node with an explicit parent (e.g. [Tree::preorder_from]), which
//!   restricts the walk to the subtree away from that parent and does not
//!   need a root to be set.
//!
//! # Example
//! ```
//! use sprtree::{NO_NODE, Tree};
//!
//! // 0 - 1 - 2 with 1 - 3
//! let mut tree: Tree<()> = Tree::new();
//! for _ in 0..4 {
//!     tree.new_node();
//! }
//! tree.add_edge(0, 1);
//! tree.add_edge(1, 2);
//! tree.add_edge(1, 3);
//!
//! let pre: Vec<_> = tree.preorder_from(0, NO_NODE).map(|s| s.node).collect();
//! assert_eq!(pre, vec![0, 1, 2, 3]);
//!
//! let post: Vec<_> = tree.postorder_from(1, 0).map(|s| s.node).collect();
//! assert_eq!(post, vec![2, 3, 1]);
//! ```

pub mod dfs;
pub mod views;

pub use dfs::{DepthFirst, Step, Visit};
pub use views::{EulerTour, InOrder, PostOrder, PreOrder};

use crate::model::{NO_NODE, NodeId, Tree};
use log::warn;

impl<T> Tree<T> {
    /// Returns the depth-first traversal starting at the root.
    ///
    /// An unrooted tree is traversed from node 0 (with a warning logged), an
    /// empty tree yields nothing.
    pub fn dfs(&self) -> DepthFirst<'_, T> {
        match self.traversal_start() {
            Some(start) => DepthFirst::new(self, start, NO_NODE),
            None => DepthFirst::empty(self),
        }
    }

    /// Returns the depth-first traversal of the subtree at `start`, seen from
    /// `parent` ([NO_NODE] for all neighbors of `start`).
    ///
    /// # Panics
    /// Panics if `start` is out of bounds.
    pub fn dfs_from(&self, start: NodeId, parent: NodeId) -> DepthFirst<'_, T> {
        DepthFirst::new(self, start, parent)
    }

    /// Returns the pre-order traversal starting at the root.
    pub fn preorder(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.dfs())
    }

    /// Returns the pre-order traversal of the subtree at `start`, seen from `parent`.
    pub fn preorder_from(&self, start: NodeId, parent: NodeId) -> PreOrder<'_, T> {
        PreOrder::new(self.dfs_from(start, parent))
    }

    /// Returns the in-order traversal starting at the root.
    pub fn inorder(&self) -> InOrder<'_, T> {
        InOrder::new(self.dfs())
    }

    /// Returns the in-order traversal of the subtree at `start`, seen from `parent`.
    pub fn inorder_from(&self, start: NodeId, parent: NodeId) -> InOrder<'_, T> {
        InOrder::new(self.dfs_from(start, parent))
    }

    /// Returns the post-order traversal starting at the root.
    pub fn postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.dfs())
    }

    /// Returns the post-order traversal of the subtree at `start`, seen from `parent`.
    pub fn postorder_from(&self, start: NodeId, parent: NodeId) -> PostOrder<'_, T> {
        PostOrder::new(self.dfs_from(start, parent))
    }

    /// Returns the Euler tour starting at the root.
    pub fn euler_tour(&self) -> EulerTour<'_, T> {
        EulerTour::new(self.dfs())
    }

    /// Returns the Euler tour of the subtree at `start`, seen from `parent`.
    pub fn euler_tour_from(&self, start: NodeId, parent: NodeId) -> EulerTour<'_, T> {
        EulerTour::new(self.dfs_from(start, parent))
    }

    fn traversal_start(&self) -> Option<NodeId> {
        if self.is_empty() {
            return None;
        }
        match self.root() {
            Some(root) => Some(root),
            None => {
                warn!("traversing unrooted tree from node 0");
                Some(0)
            }
        }
    }
}
