//! Property-based tests of the structural invariants
//!
//! Random trees are built by attaching each new node to a random earlier one,
//! then edited by a random sequence of operations. After every operation,
//! successful or not:
//! - each adjacency entry is mirrored by the neighbor,
//! - the edge count equals half the sum of all degrees,
//! - the node count never shrinks.

use proptest::prelude::*;
use sprtree::{NO_NODE, Tree, Visit};

#[derive(Debug, Clone)]
enum Op {
    AddEdge(usize, usize),
    RemoveEdge(usize, usize),
    Disconnect(usize),
    ContractEdge(usize, usize),
    ContractChain(usize),
    ContractAllChains,
    TrimLeaf(usize),
    TrimLeaves(Vec<usize>),
    TrimLeavesRooted(Vec<usize>),
    TrimRoot,
    Spr(usize, usize, usize, usize),
    SprToRoot(usize, usize),
    SprFromRoot(usize, usize, usize, usize),
    Reroot(usize, usize, usize, usize),
}

fn arb_edit(n: usize) -> impl Strategy<Value = Op> {
    let id = 0..n;
    let ids = prop::collection::vec(id.clone(), 0..4);
    prop_oneof![
        (id.clone(), id.clone()).prop_map(|(v, u)| Op::AddEdge(v, u)),
        (id.clone(), id.clone()).prop_map(|(v, u)| Op::RemoveEdge(v, u)),
        id.clone().prop_map(Op::Disconnect),
        (id.clone(), id.clone()).prop_map(|(v, u)| Op::ContractEdge(v, u)),
        id.clone().prop_map(Op::ContractChain),
        Just(Op::ContractAllChains),
        id.prop_map(Op::TrimLeaf),
        ids.clone().prop_map(Op::TrimLeaves),
        ids.prop_map(Op::TrimLeavesRooted),
        Just(Op::TrimRoot),
    ]
}

fn arb_move(n: usize) -> impl Strategy<Value = Op> {
    let id = 0..n;
    prop_oneof![
        (id.clone(), id.clone(), id.clone(), id.clone()).prop_map(|(a, b, c, d)| Op::Spr(a, b, c, d)),
        (id.clone(), id.clone()).prop_map(|(a, b)| Op::SprToRoot(a, b)),
        (id.clone(), id.clone(), id.clone(), id.clone())
            .prop_map(|(a, b, c, d)| Op::SprFromRoot(a, b, c, d)),
        (id.clone(), id.clone(), id.clone(), id.clone()).prop_map(|(a, b, c, d)| Op::Reroot(a, b, c, d)),
        (id.clone(), id.clone(), id).prop_map(|(a, c, d)| Op::Reroot(a, NO_NODE, c, d)),
    ]
}

fn arb_op(n: usize) -> impl Strategy<Value = Op> {
    prop_oneof![arb_edit(n), arb_move(n)]
}

/// Random tree given by the parent of each node `1..n`.
fn arb_tree() -> impl Strategy<Value = Tree<()>> {
    (2usize..24)
        .prop_flat_map(|n| (1..n).map(|v| 0..v).collect::<Vec<_>>())
        .prop_map(|parents| {
            let mut tree = Tree::new();
            tree.new_node();
            for parent in parents {
                let v = tree.new_node();
                tree.add_edge(parent, v);
            }
            tree.set_root(0).unwrap();
            tree
        })
}

fn apply(tree: &mut Tree<()>, op: &Op) {
    // Outcomes are irrelevant here, only the invariants are checked.
    let _ = match *op {
        Op::AddEdge(v, u) => {
            tree.add_edge(v, u);
            Ok(())
        }
        Op::RemoveEdge(v, u) => tree.remove_edge(v, u),
        Op::Disconnect(v) => tree.disconnect_node(v),
        Op::ContractEdge(v, u) => tree.contract_edge(v, u),
        Op::ContractChain(v) => tree.contract_chain(v),
        Op::ContractAllChains => tree.contract_all_chains(),
        Op::TrimLeaf(v) => tree.trim_leaf(v),
        Op::TrimLeaves(ref leaves) => tree.trim_leaves(leaves.iter().copied()),
        Op::TrimLeavesRooted(ref leaves) => tree.trim_leaves_rooted(leaves.iter().copied()),
        Op::TrimRoot => tree.trim_root(),
        Op::Spr(n, pn, u, v) => tree.spr(n, pn, u, v),
        Op::SprToRoot(n, pn) => tree.spr_to_root(n, pn),
        Op::SprFromRoot(c, r, u, v) => tree.spr_from_root(c, r, u, v),
        Op::Reroot(n, pn, u, v) => tree.reroot(n, pn, u, v),
    };
}

proptest! {
    /// Property: reciprocity and edge count hold after every operation
    #[test]
    fn prop_invariants_hold_after_edits(
        (tree, ops) in arb_tree().prop_flat_map(|tree| {
            let n = tree.node_count();
            (Just(tree), prop::collection::vec(arb_op(n), 0..32))
        })
    ) {
        let mut tree = tree;
        let mut node_count = tree.node_count();

        for op in &ops {
            apply(&mut tree, op);
            prop_assert!(tree.is_valid(), "invalid after {:?}", op);

            let degree_sum: usize = tree.nodes().map(|v| tree.degree(v)).sum();
            prop_assert_eq!(degree_sum, 2 * tree.edge_count());

            prop_assert!(tree.node_count() >= node_count);
            node_count = tree.node_count();
        }
    }

    /// Property: adding and removing an edge restores the tree
    #[test]
    fn prop_add_remove_edge_roundtrip(tree in arb_tree(), seed in any::<(usize, usize)>()) {
        let n = tree.node_count();
        let (v, u) = (seed.0 % n, seed.1 % n);
        let mut edited = tree.clone();

        edited.add_edge(v, u);
        prop_assert!(edited.remove_edge(v, u).is_ok());
        for w in tree.nodes() {
            let mut before = tree.adjacent_vec(w);
            let mut after = edited.adjacent_vec(w);
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }
        prop_assert_eq!(edited.edge_count(), tree.edge_count());
    }

    /// Property: a node is entered before and left after all its descendants
    #[test]
    fn prop_enter_leave_nest(tree in arb_tree()) {
        let steps: Vec<_> = tree.dfs().collect();
        let mut enter = vec![usize::MAX; tree.node_count()];
        let mut leave = vec![usize::MAX; tree.node_count()];
        for (i, step) in steps.iter().enumerate() {
            match step.visit {
                Visit::Enter => enter[step.node] = i,
                Visit::Leave => leave[step.node] = i,
                Visit::Between => {}
            }
        }

        for v in tree.nodes() {
            for descendant in tree.preorder_from(v, parent_of(&steps, v)).skip(1) {
                prop_assert!(enter[v] < enter[descendant.node]);
                prop_assert!(leave[v] > leave[descendant.node]);
            }
        }
    }

    /// Property: the Euler tour of a connected tree has 2E + 1 entries
    #[test]
    fn prop_euler_tour_length(tree in arb_tree()) {
        prop_assert!(tree.is_connected());
        prop_assert_eq!(tree.euler_tour().count(), 2 * tree.edge_count() + 1);
    }
}

fn parent_of(steps: &[sprtree::Step], v: usize) -> usize {
    steps
        .iter()
        .find(|s| s.node == v)
        .and_then(|s| s.parent)
        .unwrap_or(NO_NODE)
}
