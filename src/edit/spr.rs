//! Subtree prune and regraft (SPR) moves and rerooting.
//!
//! All moves first *prune* a node `k` away from all its neighbors but one
//! (`keep`), mending the gap it leaves behind, and then *regraft* `k` into
//! a target edge `(u, v)`, such that `u - k - v` becomes a path.
//!
//! Mending the gap depends on how many neighbors were cut off:
//! - two: they are joined directly,
//! - more than two: a new node joins them, so the polytomy is retained,
//! - fewer: nothing to mend.
//!
//! A move whose target edge already contains the moved node is a trivial
//! success and leaves the tree unchanged.

use crate::model::{NodeId, Tree, TreeError, TreeResult};
use log::trace;

impl<T: Default> Tree<T> {
    /// Moves the subtree rooted at `n` with parent `pn` to the root:
    /// `pn` is pruned together with `n` and becomes the new root, with the
    /// old root as its other child.
    ///
    /// # Errors
    /// - [TreeError::Unrooted] if the tree has no root
    /// - [TreeError::IsRoot] if `n` is the root
    pub fn spr_to_root(&mut self, n: NodeId, pn: NodeId) -> TreeResult<()> {
        let Some(root) = self.root() else {
            return Err(TreeError::Unrooted);
        };
        if n == root {
            return Err(TreeError::IsRoot(n));
        }
        if pn == root {
            return Ok(());
        }

        self.prune(pn, n)?;
        self.add_edge(pn, root);
        self.set_root(pn)
    }

    /// Moves the subtree rooted at the root's child `c` from the root into
    /// the edge `(u, v)`; the old root goes along with `c`, and `r` (a former
    /// sibling of `c`) becomes the new root.
    ///
    /// # Errors
    /// - [TreeError::Unrooted] if the tree has no root
    /// - [TreeError::NodeOutOfBounds] if `r` is not a node; the tree is then
    ///   unchanged
    /// - [TreeError::MissingEdge] if `(u, v)` is not an edge after pruning;
    ///   the pruning is kept
    pub fn spr_from_root(&mut self, c: NodeId, r: NodeId, u: NodeId, v: NodeId) -> TreeResult<()> {
        let Some(root) = self.root() else {
            return Err(TreeError::Unrooted);
        };
        if r >= self.node_count() {
            return Err(TreeError::NodeOutOfBounds(r));
        }
        if root == u || root == v {
            return Ok(());
        }

        self.prune(root, c)?;
        self.regraft(root, u, v)?;
        self.set_root(r)
    }

    /// Moves the subtree rooted at `n` with parent `pn` into the edge
    /// `(u, v)`, such that `u - pn - v` becomes a path. The root is unchanged.
    ///
    /// # Errors
    /// [TreeError::MissingEdge] if `(u, v)` is not an edge after pruning;
    /// the pruning is kept.
    pub fn spr(&mut self, n: NodeId, pn: NodeId, u: NodeId, v: NodeId) -> TreeResult<()> {
        if pn == u || pn == v {
            return Ok(());
        }

        self.prune(pn, n)?;
        self.regraft(pn, u, v)
    }

    /// Reroots the subtree at `n` with parent `pn` into the edge `(u, v)`,
    /// such that `u - n - v` becomes a path.
    ///
    /// Use [NO_NODE](crate::model::NO_NODE) as `pn` to move `n` away from all
    /// its neighbors, e.g. a degree-two root. The root marker is unchanged.
    ///
    /// # Errors
    /// [TreeError::MissingEdge] if `(u, v)` is not an edge after pruning;
    /// the pruning is kept.
    pub fn reroot(&mut self, n: NodeId, pn: NodeId, u: NodeId, v: NodeId) -> TreeResult<()> {
        if n == u || n == v {
            return Ok(());
        }

        self.prune(n, pn)?;
        self.regraft(n, u, v)
    }

    /// Cuts all edges of `k` but the one to `keep` and mends the gap.
    fn prune(&mut self, k: NodeId, keep: NodeId) -> TreeResult<()> {
        let cut = self.children_vec(k, keep);
        for &w in &cut {
            self.remove_edge(k, w)?;
        }

        match cut.as_slice() {
            &[a, b] => self.add_edge(a, b),
            polytomy if polytomy.len() > 2 => {
                let branch = self.new_node();
                trace!("keeping polytomy of {} nodes at new node {branch}", polytomy.len());
                for &w in polytomy {
                    self.add_edge(branch, w);
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Replaces the edge `(u, v)` by the path `u - k - v`.
    fn regraft(&mut self, k: NodeId, u: NodeId, v: NodeId) -> TreeResult<()> {
        self.remove_edge(u, v)?;
        self.add_edge(k, u);
        self.add_edge(k, v);
        Ok(())
    }
}
