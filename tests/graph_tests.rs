//! Container behaviour: round trips, bidirectional links, cascading removal.

use std::collections::HashSet;

use ugraph::*;

fn assert_bidirectional<N, E>(graph: &Graph<N, E>) {
    for &edge in graph.edges() {
        let (u, v) = edge.endpoints();
        for end in [u, v] {
            let incident = graph.incident_edges(end).unwrap();
            assert!(
                incident.iter().any(|e| e.same_entity(&edge)),
                "edge {edge} missing from incident list of {end}"
            );
        }
    }
    assert!(graph.check_consistency().is_empty());
}

#[test]
fn test_add_node_round_trip() {
    let mut graph: Graph<&str, f64> = Graph::new();
    let a = graph.add_node("A");
    assert!(graph.nodes().contains(&a));
    assert_eq!(graph.node_payload(a), Ok(&"A"));

    let b = graph.add_node("B");
    graph.add_edge(1.0, a, b).unwrap();

    assert_eq!(graph.remove_node(a), Ok("A"));
    assert!(!graph.nodes().contains(&a));
    for &node in graph.nodes() {
        assert!(graph.neighbors(node).unwrap().all(|n| n != a));
    }
}

#[test]
fn test_equal_payloads_are_distinct_nodes() {
    let mut graph: Graph<u8, ()> = Graph::new();
    let first = graph.add_node(7);
    let second = graph.add_node(7);
    assert_ne!(first, second);
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_structural_edge_equality() {
    let mut graph = Graph::new();
    let u = graph.add_node('u');
    let v = graph.add_node('v');

    let uv = graph.add_edge(1.0, u, v).unwrap();
    graph.remove_edge(uv).unwrap();
    let vu = graph.add_edge(99.0, v, u).unwrap();

    assert_eq!(uv, vu);
    let edges: HashSet<EdgeRef> = [uv, vu].into_iter().collect();
    assert_eq!(edges.len(), 1);

    // The stale handle still names a dead entity.
    assert!(!graph.contains_edge(uv));
    assert!(graph.contains_edge(vu));
}

#[test]
fn test_cascading_removal() {
    let mut graph: Graph<usize, usize> = Graph::new();
    let hub = graph.add_node(0);
    let spokes: Vec<_> = (1..=5).map(|i| graph.add_node(i)).collect();
    for (i, &s) in spokes.iter().enumerate() {
        graph.add_edge(i, hub, s).unwrap();
    }
    graph.add_edge(10, spokes[0], spokes[1]).unwrap();
    graph.add_edge(11, spokes[3], spokes[4]).unwrap();

    let degree = graph.node(hub).unwrap().degree();
    let before = graph.edge_count();
    graph.remove_node(hub).unwrap();

    assert_eq!(graph.edge_count(), before - degree);
    for &s in &spokes {
        assert!(graph
            .incident_edges(s)
            .unwrap()
            .iter()
            .all(|e| !e.touches(hub)));
    }
    assert_bidirectional(&graph);
}

#[test]
fn test_remove_edge_between() {
    let mut graph = Graph::new();
    let a = graph.add_node("a");
    let b = graph.add_node("b");
    let c = graph.add_node("c");
    graph.add_edge(5, a, b).unwrap();

    assert_eq!(graph.remove_edge_between(b, a), Ok(5));
    assert_eq!(
        graph.remove_edge_between(a, b),
        Err(GraphError::EdgeNotFound { a, b })
    );
    assert_eq!(
        graph.remove_edge_between(a, c),
        Err(GraphError::EdgeNotFound { a, b: c })
    );
    assert_bidirectional(&graph);
}

#[test]
fn test_failed_removal_leaves_graph_untouched() {
    let mut graph = Graph::new();
    let a = graph.add_node(1);
    let b = graph.add_node(2);
    let ab = graph.add_edge('x', a, b).unwrap();
    graph.remove_edge(ab).unwrap();
    let ab2 = graph.add_edge('y', a, b).unwrap();

    // `ab` is stale even though an equal edge now exists.
    assert!(graph.remove_edge(ab).is_err());
    assert_eq!(graph.edges(), &[ab2]);
    assert_eq!(graph.incident_edges(a).unwrap().len(), 1);
    assert_eq!(graph.incident_edges(b).unwrap().len(), 1);
    assert_eq!(graph.edge_payload(ab2), Ok(&'y'));
}

#[test]
fn test_removing_isolated_node() {
    let mut graph: Graph<(), ()> = Graph::new();
    let lonely = graph.add_node(());
    assert_eq!(graph.remove_node(lonely), Ok(()));
    assert!(graph.is_empty());
    assert_eq!(graph.remove_node(lonely), Err(GraphError::NodeNotFound(lonely)));
}

#[test]
fn test_edge_between_either_orientation() {
    let mut graph = Graph::new();
    let a = graph.add_node(());
    let b = graph.add_node(());
    let c = graph.add_node(());
    let ab = graph.add_edge(1, a, b).unwrap();

    assert_eq!(graph.edge_between(a, b), Some(ab));
    assert_eq!(graph.edge_between(b, a), Some(ab));
    assert_eq!(graph.edge_between(a, c), None);
}

#[test]
fn test_order_preserved_after_removals() {
    let mut graph: Graph<u32, u32> = Graph::new();
    let n: Vec<_> = (0..4).map(|i| graph.add_node(i)).collect();
    let e01 = graph.add_edge(1, n[0], n[1]).unwrap();
    let e12 = graph.add_edge(2, n[1], n[2]).unwrap();
    let e23 = graph.add_edge(3, n[2], n[3]).unwrap();

    graph.remove_edge(e12).unwrap();
    assert_eq!(graph.edges(), &[e01, e23]);

    graph.remove_node(n[1]).unwrap();
    let fresh = graph.add_node(9);
    assert_eq!(graph.nodes(), &[n[0], n[2], n[3], fresh]);
    assert_eq!(graph.edges(), &[e23]);
}

#[test]
fn test_edge_opposite_to_not_incident() {
    let mut graph = Graph::new();
    let a = graph.add_node(());
    let b = graph.add_node(());
    let c = graph.add_node(());
    let ab = graph.add_edge((), a, b).unwrap();

    assert_eq!(ab.opposite_to(a), Ok(b));
    assert_eq!(
        graph.edge(ab).unwrap().opposite_to(c),
        Err(GraphError::NotIncident { edge: ab, node: c })
    );
}

#[test]
fn test_error_messages() {
    let mut graph: Graph<(), ()> = Graph::new();
    let a = graph.add_node(());
    let b = graph.add_node(());

    assert_eq!(
        GraphError::SelfLoop(a).to_string(),
        "self-loop on node n0 is not supported"
    );
    assert_eq!(
        GraphError::EdgeNotFound { a, b }.to_string(),
        "no edge between n0 and n1 in this graph"
    );
}
