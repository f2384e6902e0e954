use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ugraph::Graph;

/// A `side` x `side` grid with unit costs.
fn grid(side: usize) -> (Graph<usize, u32>, Vec<ugraph::NodeRef>) {
    let mut graph = Graph::with_capacity(side * side, 2 * side * side);
    let nodes: Vec<_> = (0..side * side).map(|i| graph.add_node(i)).collect();
    for row in 0..side {
        for col in 0..side {
            let i = row * side + col;
            if col + 1 < side {
                graph.add_edge(1, nodes[i], nodes[i + 1]).unwrap();
            }
            if row + 1 < side {
                graph.add_edge(1, nodes[i], nodes[i + side]).unwrap();
            }
        }
    }
    (graph, nodes)
}

fn bench_graph_build(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("graph_build_chain", |b| {
        b.iter(|| {
            let mut graph = Graph::<usize, ()>::with_capacity(size, size);
            let nodes: Vec<_> = (0..size).map(|i| graph.add_node(i)).collect();
            for pair in nodes.windows(2) {
                graph.add_edge((), pair[0], pair[1]).unwrap();
            }
            black_box(graph.edge_count())
        });
    });
}

fn bench_graph_remove(c: &mut Criterion) {
    let size = 1000;

    c.bench_function("graph_sparse_remove", |b| {
        b.iter(|| {
            let mut graph = Graph::<usize, ()>::with_capacity(size, size);
            let nodes: Vec<_> = (0..size).map(|i| graph.add_node(i)).collect();
            for pair in nodes.windows(2) {
                graph.add_edge((), pair[0], pair[1]).unwrap();
            }
            black_box(graph.remove_node(nodes[size / 2]))
        });
    });

    c.bench_function("graph_hub_remove", |b| {
        b.iter(|| {
            let mut graph = Graph::<usize, ()>::with_capacity(size, size);
            let hub = graph.add_node(0);
            for i in 1..size {
                let spoke = graph.add_node(i);
                graph.add_edge((), hub, spoke).unwrap();
            }
            black_box(graph.remove_node(hub))
        });
    });
}

fn bench_traversal(c: &mut Criterion) {
    let (graph, nodes) = grid(64);

    c.bench_function("grid_64_bfs", |b| {
        b.iter(|| black_box(graph.breadth_first_traversal(nodes[0]).unwrap()));
    });

    c.bench_function("grid_64_dfs", |b| {
        b.iter(|| black_box(graph.depth_first_traversal(nodes[0]).unwrap()));
    });
}

fn bench_consistency(c: &mut Criterion) {
    let (graph, _) = grid(32);

    c.bench_function("grid_32_check_consistency", |b| {
        b.iter(|| black_box(graph.check_consistency()));
    });
}

criterion_group!(
    benches,
    bench_graph_build,
    bench_graph_remove,
    bench_traversal,
    bench_consistency
);
criterion_main!(benches);
