//! Error types for graph operations.

use thiserror::Error;

use crate::graph::{EdgeRef, NodeRef};

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by [`Graph`](crate::Graph) and its algorithms.
///
/// A failing call never leaves a partial mutation behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The node is not (or no longer) owned by this graph.
    #[error("node {0} is not in this graph")]
    NodeNotFound(NodeRef),

    /// No edge joins the two nodes, or the edge handle is stale or foreign.
    #[error("no edge between {a} and {b} in this graph")]
    EdgeNotFound {
        /// One endpoint of the missing edge.
        a: NodeRef,
        /// The other endpoint of the missing edge.
        b: NodeRef,
    },

    /// The node is neither endpoint of the edge.
    #[error("node {node} is not an endpoint of edge {edge}")]
    NotIncident {
        /// The edge that was queried.
        edge: EdgeRef,
        /// The node that was passed in.
        node: NodeRef,
    },

    /// Both endpoints of a requested edge are the same node.
    #[error("self-loop on node {0} is not supported")]
    SelfLoop(NodeRef),

    /// The edge payload has no `f64` representation usable as a cost.
    #[error("edge {0} has a payload that cannot be read as a cost")]
    InvalidCost(EdgeRef),
}

impl GraphError {
    pub(crate) fn edge_not_found(edge: EdgeRef) -> Self {
        let (a, b) = edge.endpoints();
        GraphError::EdgeNotFound { a, b }
    }
}
