//! Depth-first and breadth-first traversal.
//!
//! Both traversals are pure readers of the graph. They collect the nodes
//! they reach and the edges they cross; edges are deduplicated through a
//! `HashSet<EdgeRef>`, i.e. structurally by endpoint pair.
//!
//! On a component with cycles the two traversals cross different edge sets,
//! but they always reach the same nodes: the connected component of `start`.

use std::collections::{HashSet, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::handle::{EdgeRef, NodeRef};
use crate::graph::undirected::Graph;
use crate::trace::graph_event;

/// Outcome of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    start: NodeRef,
    visited: Vec<NodeRef>,
    edges: Vec<EdgeRef>,
    unreachable: Vec<NodeRef>,
}

impl Traversal {
    /// Node the traversal started from.
    #[inline]
    pub fn start(&self) -> NodeRef {
        self.start
    }

    /// Reached nodes, in the order they were first visited.
    #[inline]
    pub fn visited(&self) -> &[NodeRef] {
        &self.visited
    }

    /// Crossed edges, in the order they were recorded.
    #[inline]
    pub fn edges(&self) -> &[EdgeRef] {
        &self.edges
    }

    /// Nodes of the graph the traversal never reached, in graph order.
    #[inline]
    pub fn unreachable(&self) -> &[NodeRef] {
        &self.unreachable
    }

    /// Reached nodes as a set.
    pub fn visited_set(&self) -> HashSet<NodeRef> {
        self.visited.iter().copied().collect()
    }

    /// Crossed edges as a set.
    pub fn edge_set(&self) -> HashSet<EdgeRef> {
        self.edges.iter().copied().collect()
    }

    /// Returns `true` if `node` was reached.
    pub fn contains_node(&self, node: NodeRef) -> bool {
        self.visited.contains(&node)
    }

    /// Returns `true` if an edge structurally equal to `edge` was crossed.
    pub fn contains_edge(&self, edge: EdgeRef) -> bool {
        self.edges.contains(&edge)
    }
}

/// Depth-first traversal from `start`.
///
/// Neighbors are explored in incident-list order. An edge is crossed only
/// if it has not been recorded yet; the walk descends into the far node if
/// that node is unvisited. The descent uses an explicit stack, so deep
/// graphs cannot overflow the call stack, but the visiting order is the one
/// a recursive walk produces.
///
/// # Errors
/// [`GraphError::NodeNotFound`] if `start` is not in the graph.
pub fn depth_first<N, E>(graph: &Graph<N, E>, start: NodeRef) -> Result<Traversal> {
    let mut visited = HashSet::new();
    let mut traversed = HashSet::new();
    let mut order = Vec::new();
    let mut edges = Vec::new();

    ensure_node(graph, start)?;
    walk_depth_first(graph, start, &mut visited, &mut traversed, &mut order, &mut edges);

    Ok(Traversal {
        start,
        visited: order,
        edges,
        unreachable: graph.nodes_excluding(&visited),
    })
}

/// Depth-first traversal into caller-supplied sets.
///
/// Nodes already in `visited` are treated as explored and edges already in
/// `traversed` as crossed, so several calls can share one pair of sets.
/// Passing empty sets gives the same result as [`depth_first`].
///
/// # Errors
/// [`GraphError::NodeNotFound`] if `start` is not in the graph.
pub fn depth_first_into<N, E>(
    graph: &Graph<N, E>,
    start: NodeRef,
    visited: &mut HashSet<NodeRef>,
    traversed: &mut HashSet<EdgeRef>,
) -> Result<()> {
    ensure_node(graph, start)?;
    walk_depth_first(graph, start, visited, traversed, &mut Vec::new(), &mut Vec::new());
    Ok(())
}

fn walk_depth_first<N, E>(
    graph: &Graph<N, E>,
    start: NodeRef,
    visited: &mut HashSet<NodeRef>,
    traversed: &mut HashSet<EdgeRef>,
    order: &mut Vec<NodeRef>,
    edges: &mut Vec<EdgeRef>,
) {
    if !visited.insert(start) {
        return;
    }
    order.push(start);

    // Each frame is a node and the unexplored rest of its incident list.
    let mut stack = vec![(start, graph.incident(start).iter())];
    while let Some((node, incident)) = stack.last_mut() {
        let node = *node;
        let Some(&edge) = incident.next() else {
            stack.pop();
            continue;
        };
        let Ok(neighbor) = edge.opposite_to(node) else {
            continue;
        };
        if !traversed.insert(edge) {
            continue;
        }
        edges.push(edge);
        graph_event!(trace, %node, %neighbor, %edge, "dfs crossed edge");

        if visited.insert(neighbor) {
            order.push(neighbor);
            stack.push((neighbor, graph.incident(neighbor).iter()));
        }
    }
}

/// Breadth-first traversal from `start`.
///
/// Nodes are marked visited when dequeued, not when enqueued, so a node
/// reachable along several equally short paths may be queued more than
/// once; its later dequeues are skipped. For every unvisited neighbor of a
/// dequeued node the neighbor is queued and the joining edge recorded.
///
/// The result also lists the nodes that were never reached.
///
/// # Errors
/// [`GraphError::NodeNotFound`] if `start` is not in the graph.
pub fn breadth_first<N, E>(graph: &Graph<N, E>, start: NodeRef) -> Result<Traversal> {
    ensure_node(graph, start)?;

    let mut visited = HashSet::new();
    let mut traversed = HashSet::new();
    let mut order = Vec::new();
    let mut edges = Vec::new();
    let mut queue = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);

        for &edge in graph.incident(node) {
            let Ok(neighbor) = edge.opposite_to(node) else {
                continue;
            };
            if visited.contains(&neighbor) {
                continue;
            }
            queue.push_back(neighbor);
            if traversed.insert(edge) {
                edges.push(edge);
                graph_event!(trace, %node, %neighbor, %edge, "bfs crossed edge");
            }
        }
    }

    let unreachable = graph.nodes_excluding(&visited);
    graph_event!(
        debug,
        %start,
        reached = order.len(),
        unreachable = unreachable.len(),
        "bfs finished"
    );
    Ok(Traversal {
        start,
        visited: order,
        edges,
        unreachable,
    })
}

fn ensure_node<N, E>(graph: &Graph<N, E>, node: NodeRef) -> Result<()> {
    if graph.contains_node(node) {
        Ok(())
    } else {
        Err(GraphError::NodeNotFound(node))
    }
}

impl<N, E> Graph<N, E> {
    /// Depth-first traversal from `start`. See [`depth_first`].
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `start` is not in the graph.
    pub fn depth_first_traversal(&self, start: NodeRef) -> Result<Traversal> {
        depth_first(self, start)
    }

    /// Breadth-first traversal from `start`. See [`breadth_first`].
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if `start` is not in the graph.
    pub fn breadth_first_traversal(&self, start: NodeRef) -> Result<Traversal> {
        breadth_first(self, start)
    }
}
