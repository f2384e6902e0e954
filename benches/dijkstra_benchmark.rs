use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ugraph::{Graph, NodeRef};

/// Ring of `n` nodes plus chords every 7 steps, costs 1..=9.
fn ring_with_chords(n: usize) -> (Graph<usize, f64>, Vec<NodeRef>) {
    let mut graph = Graph::with_capacity(n, 2 * n);
    let nodes: Vec<_> = (0..n).map(|i| graph.add_node(i)).collect();
    for i in 0..n {
        let cost = (i % 9 + 1) as f64;
        graph.add_edge(cost, nodes[i], nodes[(i + 1) % n]).unwrap();
        if i % 7 == 0 {
            graph.add_edge(cost * 3.0, nodes[i], nodes[(i + n / 2) % n]).unwrap();
        }
    }
    (graph, nodes)
}

fn bench_dijkstra(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_ring");
    for n in [64, 256, 1024] {
        let (graph, nodes) = ring_with_chords(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(graph.shortest_paths(nodes[0]).unwrap()));
        });
    }
    group.finish();
}

fn bench_shortest_path_cost(c: &mut Criterion) {
    let (graph, nodes) = ring_with_chords(512);
    let far = nodes[nodes.len() / 3];

    c.bench_function("shortest_path_cost_512", |b| {
        b.iter(|| black_box(graph.shortest_path_cost(nodes[0], far).unwrap()));
    });
}

criterion_group!(benches, bench_dijkstra, bench_shortest_path_cost);
criterion_main!(benches);
