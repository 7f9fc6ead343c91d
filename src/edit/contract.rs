//! Edge and chain contraction.
//!
//! A chain node is a node of degree two. Contracting it joins its two
//! neighbors directly and leaves the chain node isolated in the arena.

use crate::model::{NodeId, Tree, TreeError, TreeResult};
use log::{debug, trace};

impl<T> Tree<T> {
    /// Contracts the edge `(v, u)` into `v`.
    ///
    /// All other neighbors of `u` get reattached to `v`; `u` ends up isolated.
    ///
    /// # Errors
    /// [TreeError::MissingEdge] if `v` and `u` are not adjacent; the tree is
    /// then unchanged.
    pub fn contract_edge(&mut self, v: NodeId, u: NodeId) -> TreeResult<()> {
        self.remove_edge(v, u)?;
        for w in self.adjacent_vec(u) {
            self.remove_edge(w, u)?;
            self.add_edge(w, v);
        }
        Ok(())
    }

    /// Contracts the chain node `v`, joining its two neighbors by an edge.
    ///
    /// # Errors
    /// - [TreeError::UnexpectedDegree] if `v` does not have degree two
    /// - [TreeError::IsRoot] if `v` is the root
    pub fn contract_chain_node(&mut self, v: NodeId) -> TreeResult<()> {
        let degree = self.degree(v);
        if degree != 2 {
            trace!("node {v} is no chain node (degree {degree})");
            return Err(TreeError::UnexpectedDegree {
                node: v,
                degree,
                expected: 2,
            });
        }
        if self.root() == Some(v) {
            return Err(TreeError::IsRoot(v));
        }

        let (a, b) = {
            let neighbors = self.adjacent(v).as_slice();
            (neighbors[0], neighbors[1])
        };
        self.remove_edge(a, v)?;
        self.remove_edge(b, v)?;
        self.add_edge(a, b);
        Ok(())
    }

    /// Contracts the chain containing `v`, cascading through all reachable
    /// chain nodes.
    ///
    /// Uses an explicit stack: the popped node's chain neighbors are pushed,
    /// then the popped node is contracted.
    ///
    /// # Errors
    /// The error of the first node that cannot be contracted. Contractions
    /// performed before are kept.
    pub fn contract_chain(&mut self, v: NodeId) -> TreeResult<()> {
        let mut stack = vec![v];
        while let Some(u) = stack.pop() {
            stack.extend(self.adjacent(u).iter().filter(|&w| self.degree(w) == 2));
            self.contract_chain_node(u)?;
        }
        Ok(())
    }

    /// Tries to contract every node once, in id order.
    ///
    /// # Errors
    /// The error of the first node that cannot be contracted; nodes with a
    /// smaller id stay contracted.
    pub fn contract_all_chains(&mut self) -> TreeResult<()> {
        for v in self.nodes() {
            if let Err(err) = self.contract_chain_node(v) {
                debug!("contracting all chains stopped at node {v}: {err}");
                return Err(err);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{NO_NODE, Tree, TreeError};

    fn path(n: usize) -> Tree<()> {
        let mut tree = Tree::new();
        for _ in 0..n {
            tree.new_node();
        }
        for v in 1..n {
            tree.add_edge(v - 1, v);
        }
        tree
    }

    #[test]
    fn test_contract_edge_moves_neighbors() {
        // 0 - 1, 1 - 2, 1 - 3
        let mut tree = path(3);
        let d = tree.new_node();
        tree.add_edge(1, d);

        tree.contract_edge(0, 1).unwrap();
        assert_eq!(tree.degree(1), 0);
        assert!(tree.has_edge(0, 2));
        assert!(tree.has_edge(0, d));
        assert_eq!(tree.edge_count(), 2);
        assert!(tree.is_valid());
    }

    #[test]
    fn test_contract_edge_missing() {
        let mut tree = path(3);
        assert_eq!(tree.contract_edge(0, 2), Err(TreeError::MissingEdge(0, 2)));
        assert_eq!(tree.edge_count(), 2);
    }

    #[test]
    fn test_chain_node_root_rejected() {
        let mut tree = path(3);
        tree.set_root(1).unwrap();
        assert_eq!(tree.contract_chain_node(1), Err(TreeError::IsRoot(1)));
        assert_eq!(tree.children_vec(1, NO_NODE), vec![0, 2]);
    }

    #[test]
    fn test_contract_chain_collapses_path() {
        // 0 - 1 - 2 - 3 - 4, contracting from 2 leaves only 0 - 4
        let mut tree = path(5);
        let result = tree.contract_chain(2);

        // The cascade revisits node 1 after it has been contracted.
        assert!(result.is_err());
        assert_eq!(tree.edge_count(), 1);
        assert!(tree.has_edge(0, 4));
        assert!(tree.is_valid());
    }
}
