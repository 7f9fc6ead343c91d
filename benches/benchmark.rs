use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sprtree::Tree;

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

/// Caterpillar with `n` spine nodes, each spine node carrying one leaf.
fn caterpillar(n: usize) -> Tree<()> {
    let mut tree = Tree::with_capacity(2 * n);
    let mut previous = tree.new_node();
    tree.set_root(previous).unwrap();
    for _ in 1..n {
        let spine = tree.new_node();
        let leaf = tree.new_node();
        tree.add_edge(previous, spine);
        tree.add_edge(spine, leaf);
        previous = spine;
    }
    tree
}

/// Complete binary tree in heap layout, children of `i` are `2i + 1` and `2i + 2`.
fn complete_binary(n: usize) -> Tree<()> {
    let mut tree = Tree::with_capacity(n);
    for _ in 0..n {
        tree.new_node();
    }
    for v in 1..n {
        tree.add_edge((v - 1) / 2, v);
    }
    tree.set_root(0).unwrap();
    tree
}

fn traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for &n in SIZES {
        let tree = caterpillar(n);
        group.bench_with_input(BenchmarkId::new("preorder", n), &tree, |b, tree| {
            b.iter(|| tree.preorder().map(|step| step.node).sum::<usize>());
        });
        group.bench_with_input(BenchmarkId::new("euler_tour", n), &tree, |b, tree| {
            b.iter(|| tree.euler_tour().count());
        });
    }
    group.finish();
}

fn spr_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("spr");
    for &n in SIZES {
        let mut tree = complete_binary(n);
        group.bench_function(BenchmarkId::new("move_and_back", n), |b| {
            b.iter(|| {
                // Into (2, 5) and back into (0, 4)
                tree.spr(black_box(3), 1, 2, 5).unwrap();
                tree.spr(black_box(3), 1, 0, 4).unwrap();
            });
        });
    }
    group.finish();
}

fn connectivity(c: &mut Criterion) {
    let tree = complete_binary(100_000);
    c.bench_function("components", |b| b.iter(|| black_box(&tree).components()));
}

criterion_group!(benches, traversals, spr_moves, connectivity);
criterion_main!(benches);
