use petgraph::graph::{NodeIndex, UnGraph};
use proptest::prelude::*;
use std::collections::HashSet;
use ugraph::*;

#[derive(Debug, Clone)]
enum Operation {
    AddNode(u16),
    AddEdge(usize, usize, u8),
    RemoveNode(usize),
    RemoveEdge(usize),
    RemoveEdgeBetween(usize, usize),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<u16>().prop_map(Operation::AddNode),
        4 => (any::<usize>(), any::<usize>(), any::<u8>())
            .prop_map(|(a, b, w)| Operation::AddEdge(a, b, w)),
        1 => any::<usize>().prop_map(Operation::RemoveNode),
        1 => any::<usize>().prop_map(Operation::RemoveEdge),
        1 => (any::<usize>(), any::<usize>())
            .prop_map(|(a, b)| Operation::RemoveEdgeBetween(a, b)),
    ]
}

fn pick<T: Copy>(items: &[T], i: usize) -> Option<T> {
    if items.is_empty() {
        None
    } else {
        Some(items[i % items.len()])
    }
}

fn apply(graph: &mut Graph<u16, u8>, op: &Operation) {
    match *op {
        Operation::AddNode(p) => {
            graph.add_node(p);
        }
        Operation::AddEdge(a, b, w) => {
            if let (Some(a), Some(b)) = (pick(graph.nodes(), a), pick(graph.nodes(), b)) {
                let result = graph.add_edge(w, a, b);
                if a == b {
                    assert_eq!(result, Err(GraphError::SelfLoop(a)));
                } else {
                    assert!(result.is_ok());
                }
            }
        }
        Operation::RemoveNode(i) => {
            if let Some(node) = pick(graph.nodes(), i) {
                let degree = graph.incident_edges(node).unwrap().len();
                let before = graph.edge_count();
                graph.remove_node(node).unwrap();
                assert_eq!(graph.edge_count(), before - degree);
                assert!(!graph.nodes().contains(&node));
            }
        }
        Operation::RemoveEdge(i) => {
            if let Some(edge) = pick(graph.edges(), i) {
                graph.remove_edge(edge).unwrap();
                assert!(!graph.contains_edge(edge));
                assert!(graph.remove_edge(edge).is_err());
            }
        }
        Operation::RemoveEdgeBetween(a, b) => {
            if let (Some(a), Some(b)) = (pick(graph.nodes(), a), pick(graph.nodes(), b)) {
                let existed = graph.edge_between(a, b).is_some();
                let before = graph.edge_count();
                let result = graph.remove_edge_between(a, b);
                assert_eq!(result.is_ok(), existed);
                if !existed {
                    assert_eq!(graph.edge_count(), before);
                }
            }
        }
    }
}

proptest! {
    #[test]
    fn test_random_operations_keep_graph_consistent(
        ops in proptest::collection::vec(operation(), 1..120)
    ) {
        let mut graph = Graph::new();
        for op in &ops {
            apply(&mut graph, op);
            let violations = graph.check_consistency();
            prop_assert!(violations.is_empty(), "after {:?}: {:?}", op, violations);
        }

        // No surviving node lists a removed neighbor.
        let live: HashSet<_> = graph.nodes().iter().copied().collect();
        for &node in graph.nodes() {
            for neighbor in graph.neighbors(node).unwrap() {
                prop_assert!(live.contains(&neighbor));
            }
        }
    }

    #[test]
    fn test_dfs_and_bfs_agree_on_nodes(
        ops in proptest::collection::vec(operation(), 1..120),
        start in any::<usize>(),
    ) {
        let mut graph = Graph::new();
        for op in &ops {
            apply(&mut graph, op);
        }

        if let Some(start) = pick(graph.nodes(), start) {
            let dfs = graph.depth_first_traversal(start).unwrap();
            let bfs = graph.breadth_first_traversal(start).unwrap();
            prop_assert_eq!(dfs.visited_set(), bfs.visited_set());
            prop_assert_eq!(dfs.unreachable(), bfs.unreachable());
            prop_assert_eq!(
                dfs.visited().len() + dfs.unreachable().len(),
                graph.node_count()
            );
        }
    }

    #[test]
    fn test_dijkstra_matches_petgraph(
        node_count in 1usize..24,
        edges in proptest::collection::vec((any::<usize>(), any::<usize>(), 0u8..50), 0..80),
        start in any::<usize>(),
    ) {
        let mut graph: Graph<usize, u8> = Graph::new();
        let mut reference: UnGraph<(), f64> = UnGraph::new_undirected();

        let nodes: Vec<NodeRef> = (0..node_count).map(|i| graph.add_node(i)).collect();
        let indices: Vec<NodeIndex> = (0..node_count).map(|_| reference.add_node(())).collect();

        for (a, b, w) in edges {
            let (a, b) = (a % node_count, b % node_count);
            if a == b {
                continue;
            }
            graph.add_edge(w, nodes[a], nodes[b]).unwrap();
            reference.add_edge(indices[a], indices[b], f64::from(w));
        }

        let start = start % node_count;
        let paths = graph.shortest_paths(nodes[start]).unwrap();
        let expected = petgraph::algo::dijkstra(&reference, indices[start], None, |e| *e.weight());

        for i in 0..node_count {
            let cost = paths.cost(nodes[i]);
            match expected.get(&indices[i]) {
                Some(&reference_cost) => prop_assert_eq!(cost, reference_cost),
                None => prop_assert_eq!(cost, f64::INFINITY),
            }

            if let Some(path) = paths.path_to(nodes[i]) {
                prop_assert_eq!(path.first(), Some(&nodes[start]));
                prop_assert_eq!(path.last(), Some(&nodes[i]));
            }
        }
    }
}
