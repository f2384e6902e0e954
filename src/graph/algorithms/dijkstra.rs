//! Single-source shortest paths (Dijkstra).
//!
//! Edge payloads supply costs through [`num_traits::ToPrimitive::to_f64`].
//! All costs must be non-negative; negative costs are not detected and give
//! meaningless results.
//!
//! Selection scans every node on each round instead of using a priority
//! queue, for \(O(V^2 + E)\) overall. Tie-breaks are fixed:
//! - among unvisited nodes of equal tentative cost, the one scanned **last**
//!   (in node-collection order) is selected;
//! - relaxation accepts `candidate <= current`, so among equally cheap
//!   paths the most recently discovered one wins.
//!
//! Unreachable nodes keep a cost of `f64::INFINITY`; that is a result, not
//! an error. An edge costing `f64::INFINITY` is impassable. A `NaN` cost is
//! rejected with [`GraphError::InvalidCost`].

use std::collections::HashMap;

use num_traits::ToPrimitive;

use crate::error::{GraphError, Result};
use crate::graph::handle::{EdgeRef, NodeRef};
use crate::graph::undirected::Graph;
use crate::trace::graph_event;

/// Per-node search state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Label {
    cost: f64,
    predecessor: Option<NodeRef>,
    visited: bool,
}

impl Label {
    const UNSEEN: Label = Label {
        cost: f64::INFINITY,
        predecessor: None,
        visited: false,
    };
}

/// Costs and predecessor links from one start node to every node.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    start: NodeRef,
    position: HashMap<NodeRef, usize>,
    labels: Vec<Label>,
    settled: usize,
}

impl ShortestPaths {
    /// The start node.
    #[inline]
    pub fn start(&self) -> NodeRef {
        self.start
    }

    /// Cost of the cheapest path from the start to `node`.
    ///
    /// `f64::INFINITY` when `node` is unreachable or was not in the graph.
    pub fn cost(&self, node: NodeRef) -> f64 {
        self.label(node).map_or(f64::INFINITY, |label| label.cost)
    }

    /// Returns `true` if some path joins the start and `node`.
    pub fn is_reachable(&self, node: NodeRef) -> bool {
        self.cost(node).is_finite()
    }

    /// Previous node on the cheapest path to `node`.
    ///
    /// The start node is its own predecessor; unreachable nodes have none.
    pub fn predecessor(&self, node: NodeRef) -> Option<NodeRef> {
        self.label(node).and_then(|label| label.predecessor)
    }

    /// The cheapest path from the start to `node`, both ends included.
    ///
    /// Returns `None` when `node` is unreachable.
    pub fn path_to(&self, node: NodeRef) -> Option<Vec<NodeRef>> {
        if !self.is_reachable(node) {
            return None;
        }

        let mut path = vec![node];
        let mut current = node;
        while current != self.start {
            // Settle order is strict, so the chain is acyclic; the bound is
            // a backstop for corrupted labels.
            if path.len() > self.labels.len() {
                return None;
            }
            current = self.predecessor(current)?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// Number of nodes whose cost was finalized.
    #[inline]
    pub fn settled(&self) -> usize {
        self.settled
    }

    fn label(&self, node: NodeRef) -> Option<&Label> {
        self.position.get(&node).map(|&i| &self.labels[i])
    }
}

/// Runs Dijkstra from `start` over the whole graph.
///
/// # Errors
/// - [`GraphError::NodeNotFound`] if `start` is not in the graph.
/// - [`GraphError::InvalidCost`] if a crossed edge payload has no `f64` value
///   or reads as `NaN`.
pub fn dijkstra<N, E>(graph: &Graph<N, E>, start: NodeRef) -> Result<ShortestPaths>
where
    E: ToPrimitive,
{
    let nodes = graph.nodes();
    let position: HashMap<NodeRef, usize> =
        nodes.iter().enumerate().map(|(i, &node)| (node, i)).collect();
    let origin = *position
        .get(&start)
        .ok_or(GraphError::NodeNotFound(start))?;

    let mut labels = vec![Label::UNSEEN; nodes.len()];
    labels[origin] = Label {
        cost: 0.0,
        predecessor: Some(start),
        visited: false,
    };

    let mut settled = 0;
    while let Some(current) = select_cheapest_unvisited(&labels) {
        labels[current].visited = true;
        settled += 1;

        let node = nodes[current];
        let base = labels[current].cost;
        graph_event!(trace, %node, cost = base, "dijkstra settled node");

        for &edge in graph.incident(node) {
            let Ok(neighbor) = edge.opposite_to(node) else {
                continue;
            };
            let Some(&j) = position.get(&neighbor) else {
                continue;
            };
            if labels[j].visited {
                continue;
            }

            let candidate = base + edge_cost(graph, edge)?;
            if candidate.is_finite() && candidate <= labels[j].cost {
                labels[j].cost = candidate;
                labels[j].predecessor = Some(node);
                graph_event!(trace, %neighbor, via = %node, cost = candidate, "dijkstra relaxed");
            }
        }
    }

    graph_event!(debug, %start, settled, total = nodes.len(), "dijkstra finished");
    Ok(ShortestPaths {
        start,
        position,
        labels,
        settled,
    })
}

/// Cost of the cheapest path between `start` and `end`, `f64::INFINITY`
/// if they are not connected.
///
/// # Errors
/// - [`GraphError::NodeNotFound`] if either node is not in the graph.
/// - [`GraphError::InvalidCost`] if a crossed edge payload has no `f64` value
///   or reads as `NaN`.
pub fn shortest_path_cost<N, E>(graph: &Graph<N, E>, start: NodeRef, end: NodeRef) -> Result<f64>
where
    E: ToPrimitive,
{
    if !graph.contains_node(end) {
        return Err(GraphError::NodeNotFound(end));
    }
    Ok(dijkstra(graph, start)?.cost(end))
}

/// Index of the unvisited node with the lowest finite cost; later entries
/// win ties.
fn select_cheapest_unvisited(labels: &[Label]) -> Option<usize> {
    let mut best = None;
    let mut lowest = f64::INFINITY;
    for (i, label) in labels.iter().enumerate() {
        if !label.visited && label.cost < f64::INFINITY && label.cost <= lowest {
            lowest = label.cost;
            best = Some(i);
        }
    }
    best
}

fn edge_cost<N, E>(graph: &Graph<N, E>, edge: EdgeRef) -> Result<f64>
where
    E: ToPrimitive,
{
    graph
        .edge_payload(edge)?
        .to_f64()
        .filter(|cost| !cost.is_nan())
        .ok_or(GraphError::InvalidCost(edge))
}

impl<N, E> Graph<N, E>
where
    E: ToPrimitive,
{
    /// Shortest paths from `start` to every node. See [`dijkstra`].
    ///
    /// # Errors
    /// Same as [`dijkstra`].
    pub fn shortest_paths(&self, start: NodeRef) -> Result<ShortestPaths> {
        dijkstra(self, start)
    }

    /// Cost of the cheapest path between two nodes. See [`shortest_path_cost`].
    ///
    /// # Errors
    /// Same as [`shortest_path_cost`].
    pub fn shortest_path_cost(&self, start: NodeRef, end: NodeRef) -> Result<f64> {
        shortest_path_cost(self, start, end)
    }
}
