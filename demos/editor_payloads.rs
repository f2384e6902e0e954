//! Editor-style payloads carried through the graph
//!
//! Nodes carry a screen position and color, edges carry both endpoint
//! positions, a color and a cost. Only the cost matters to the graph.
//!
//! Run with `RUST_LOG=ugraph=trace cargo run --example editor_payloads --features tracing`.

use std::fmt;

use num_traits::ToPrimitive;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ugraph::{Graph, NodeRef};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Black,
    Red,
    Blue,
}

#[derive(Debug, Clone)]
struct NodeData {
    at: Point,
    color: Color,
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) {:?}", self.at.x, self.at.y, self.color)
    }
}

#[derive(Debug, Clone)]
struct EdgeData {
    from: Point,
    to: Point,
    color: Color,
    cost: f64,
}

impl EdgeData {
    /// Edge between two points, costed by euclidean length.
    fn between(from: Point, to: Point) -> Self {
        let (dx, dy) = (f64::from(to.x - from.x), f64::from(to.y - from.y));
        Self {
            from,
            to,
            color: Color::Black,
            cost: dx.hypot(dy).round(),
        }
    }
}

impl ToPrimitive for EdgeData {
    fn to_i64(&self) -> Option<i64> {
        self.cost.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.cost.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.cost)
    }
}

impl fmt::Display for EdgeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cost)
    }
}

fn place(graph: &mut Graph<NodeData, EdgeData>, x: i32, y: i32) -> NodeRef {
    graph.add_node(NodeData {
        at: Point { x, y },
        color: Color::Black,
    })
}

fn connect(graph: &mut Graph<NodeData, EdgeData>, a: NodeRef, b: NodeRef) -> ugraph::Result<()> {
    let payload = EdgeData::between(graph.node_payload(a)?.at, graph.node_payload(b)?.at);
    graph.add_edge(payload, a, b)?;
    Ok(())
}

fn main() -> ugraph::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ugraph=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut graph = Graph::new();
    let a = place(&mut graph, 0, 0);
    let b = place(&mut graph, 30, 40);
    let c = place(&mut graph, 60, 0);
    let d = place(&mut graph, 60, 80);
    connect(&mut graph, a, b)?;
    connect(&mut graph, b, c)?;
    connect(&mut graph, a, c)?;
    connect(&mut graph, b, d)?;
    connect(&mut graph, c, d)?;

    // Dragging a node moves the ends of its edges with it.
    let moved = Point { x: 30, y: 10 };
    graph.node_payload_mut(b)?.at = moved;
    for edge in graph.incident_edges(b)?.to_vec() {
        let (from, to) = {
            let data = graph.edge_payload(edge)?;
            if edge.head() == b {
                (moved, data.to)
            } else {
                (data.from, moved)
            }
        };
        let color = graph.edge_payload(edge)?.color;
        graph.set_edge_payload(edge, EdgeData { color, ..EdgeData::between(from, to) })?;
    }

    // Highlight the cheapest route from a to d.
    let paths = graph.shortest_paths(a)?;
    let route = paths.path_to(d).unwrap_or_default();
    for pair in route.windows(2) {
        if let Some(edge) = graph.edge_between(pair[0], pair[1]) {
            graph.edge_payload_mut(edge)?.color = Color::Red;
        }
    }
    for &node in &route {
        graph.node_payload_mut(node)?.color = Color::Blue;
    }

    print!("{}", graph.display());
    println!("a -> d costs {}", paths.cost(d));

    let dfs = graph.depth_first_traversal(a)?;
    let highlighted = graph
        .edges()
        .iter()
        .filter(|&&e| graph.edge_payload(e).is_ok_and(|p| p.color == Color::Red))
        .count();
    println!(
        "dfs crossed {} edge(s); {} edge(s) on the highlighted route",
        dfs.edges().len(),
        highlighted
    );

    graph.remove_node(b)?;
    tracing::info!(nodes = graph.node_count(), edges = graph.edge_count(), "removed dragged node");
    debug_assert!(graph.check_consistency().is_empty());
    Ok(())
}
