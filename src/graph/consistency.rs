//! Structural self-check for [`Graph`].
//!
//! The public API keeps every invariant by construction; this walker exists
//! for callers (and tests) that want to verify it. It never mutates and
//! never fails.

use core::fmt;
use std::collections::HashSet;

use crate::alloc::ArenaIndex;
use crate::graph::handle::{EdgeRef, NodeRef};
use crate::graph::undirected::Graph;
use crate::trace::graph_event;

/// One broken graph invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// An edge of the edge collection is missing from an endpoint's incident list.
    MissingBackLink {
        /// The edge.
        edge: EdgeRef,
        /// The endpoint that does not list it.
        node: NodeRef,
    },
    /// An edge's endpoint is not in the node collection.
    EndpointNotInGraph {
        /// The edge.
        edge: EdgeRef,
        /// The absent endpoint.
        node: NodeRef,
    },
    /// A node's incident list names an edge that is not in the edge collection.
    DanglingIncident {
        /// The node holding the stale entry.
        node: NodeRef,
        /// The stale edge.
        edge: EdgeRef,
    },
    /// A node's incident list names an edge that does not touch the node.
    NotAnEndpoint {
        /// The node holding the entry.
        node: NodeRef,
        /// The edge that does not touch it.
        edge: EdgeRef,
    },
    /// The node collection lists a node whose storage is gone.
    StaleNode(NodeRef),
    /// The edge collection lists an edge whose storage is gone.
    StaleEdge(EdgeRef),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::MissingBackLink { edge, node } => {
                write!(f, "endpoint {node} of edge {edge} does not link back to the edge")
            }
            Violation::EndpointNotInGraph { edge, node } => {
                write!(f, "endpoint {node} of edge {edge} is not in the node collection")
            }
            Violation::DanglingIncident { node, edge } => {
                write!(f, "edge {edge} listed by node {node} is not in the edge collection")
            }
            Violation::NotAnEndpoint { node, edge } => {
                write!(f, "edge {edge} listed by node {node} does not reference the node")
            }
            Violation::StaleNode(node) => write!(f, "node {node} is listed but not stored"),
            Violation::StaleEdge(edge) => write!(f, "edge {edge} is listed but not stored"),
        }
    }
}

impl<N, E> Graph<N, E> {
    /// Walks every structural invariant and describes each violation found.
    ///
    /// Returns an empty vector for a consistent graph.
    pub fn check_consistency(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        // Edge handles compare by endpoint pair, so listed edges are keyed
        // by arena index.
        let listed_nodes: HashSet<NodeRef> = self.node_order.iter().copied().collect();
        let listed_edges: HashSet<ArenaIndex> =
            self.edge_order.iter().map(|edge| edge.index()).collect();

        for &node in &self.node_order {
            if !self.nodes.contains(node.index()) {
                report(&mut violations, Violation::StaleNode(node));
            }
        }

        for &edge in &self.edge_order {
            if !self.edges.contains(edge.index()) {
                report(&mut violations, Violation::StaleEdge(edge));
            }
            for node in [edge.head(), edge.tail()] {
                if !listed_nodes.contains(&node) {
                    report(&mut violations, Violation::EndpointNotInGraph { edge, node });
                }
                let linked = self
                    .node_data(node)
                    .is_ok_and(|data| data.incident.iter().any(|e| e.same_entity(&edge)));
                if !linked {
                    report(&mut violations, Violation::MissingBackLink { edge, node });
                }
            }
        }

        for &node in &self.node_order {
            let Ok(data) = self.node_data(node) else {
                continue;
            };
            for &edge in &data.incident {
                if !listed_edges.contains(&edge.index()) {
                    report(&mut violations, Violation::DanglingIncident { node, edge });
                }
                if !edge.touches(node) {
                    report(&mut violations, Violation::NotAnEndpoint { node, edge });
                }
            }
        }

        violations
    }
}

fn report(violations: &mut Vec<Violation>, violation: Violation) {
    graph_event!(warn, %violation, "graph invariant broken");
    violations.push(violation);
}
