//! Trimming of leaves and of a dangling root.
//!
//! Removing a leaf can turn its former neighbor into a chain node, which is
//! then contracted (see [Tree::contract_chain]).

use crate::model::{NodeId, Tree, TreeError, TreeResult};
use log::trace;

impl<T> Tree<T> {
    /// Cuts off the leaf `v` and contracts the chain at its former neighbor.
    ///
    /// Whether that contraction succeeds is not reported: the former neighbor
    /// might just not be a chain node.
    ///
    /// # Errors
    /// [TreeError::UnexpectedDegree] if `v` does not have degree one.
    pub fn trim_leaf(&mut self, v: NodeId) -> TreeResult<()> {
        let p = match self.adjacent(v).as_slice() {
            &[p] => p,
            neighbors => {
                return Err(TreeError::UnexpectedDegree {
                    node: v,
                    degree: neighbors.len(),
                    expected: 1,
                });
            }
        };
        self.remove_edge(v, p)?;
        if let Err(err) = self.contract_chain(p) {
            trace!("no chain contracted after trimming leaf {v}: {err}");
        }
        Ok(())
    }

    /// Cuts off the given leaves in order.
    ///
    /// # Errors
    /// The error of the first leaf that cannot be trimmed; leaves before it
    /// stay trimmed.
    pub fn trim_leaves<I>(&mut self, leaves: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = NodeId>,
    {
        for v in leaves {
            self.trim_leaf(v)?;
        }
        Ok(())
    }

    /// Cuts off the given leaves in order, then trims the root.
    ///
    /// The root is trimmed even if trimming the leaves failed, and the result
    /// of [Tree::trim_root] is not reported.
    ///
    /// # Errors
    /// The error of the first leaf that cannot be trimmed.
    pub fn trim_leaves_rooted<I>(&mut self, leaves: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = NodeId>,
    {
        let result = self.trim_leaves(leaves);
        if let Err(err) = self.trim_root() {
            trace!("root not trimmed: {err}");
        }
        result
    }

    /// Moves the root down while it has exactly one child, cutting off the
    /// edge to that child each time.
    ///
    /// # Errors
    /// - [TreeError::Unrooted] if the tree has no root
    /// - [TreeError::UnexpectedDegree] if the root does not have degree one
    pub fn trim_root(&mut self) -> TreeResult<()> {
        let Some(mut root) = self.root() else {
            return Err(TreeError::Unrooted);
        };
        let degree = self.degree(root);
        if degree != 1 {
            return Err(TreeError::UnexpectedDegree {
                node: root,
                degree,
                expected: 1,
            });
        }

        while let (1, Some(child)) = (self.degree(root), self.adjacent(root).first()) {
            self.remove_edge(child, root)?;
            self.set_root(child)?;
            root = child;
        }
        Ok(())
    }
}
