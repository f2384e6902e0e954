//! Borrowed, read-only views of graph entities.

use core::slice;

use crate::error::Result;
use crate::graph::handle::{EdgeRef, NodeRef};

/// Read-only view of one node, borrowed from its [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy)]
pub struct NodeView<'a, N> {
    id: NodeRef,
    payload: &'a N,
    incident: &'a [EdgeRef],
}

impl<'a, N> NodeView<'a, N> {
    pub(crate) fn new(id: NodeRef, payload: &'a N, incident: &'a [EdgeRef]) -> Self {
        Self {
            id,
            payload,
            incident,
        }
    }

    /// Handle of the viewed node.
    #[inline]
    pub fn id(&self) -> NodeRef {
        self.id
    }

    /// The node's payload.
    #[inline]
    pub fn payload(&self) -> &'a N {
        self.payload
    }

    /// Incident edges in attachment order.
    #[inline]
    pub fn incident_edges(&self) -> &'a [EdgeRef] {
        self.incident
    }

    /// Number of incident edges.
    #[inline]
    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    /// First incident edge touching `neighbor`, if any.
    pub fn edge_to(&self, neighbor: NodeRef) -> Option<EdgeRef> {
        self.incident.iter().copied().find(|e| e.joins(self.id, neighbor))
    }

    /// Opposite endpoint of every incident edge, in attachment order.
    ///
    /// A node joined to the same neighbor by parallel edges yields that
    /// neighbor once per edge.
    #[inline]
    pub fn neighbors(&self) -> Neighbors<'a> {
        Neighbors {
            node: self.id,
            edges: self.incident.iter(),
        }
    }

    /// Returns `true` if an edge joins this node and `other`.
    #[inline]
    pub fn is_neighbor(&self, other: NodeRef) -> bool {
        self.edge_to(other).is_some()
    }
}

/// Read-only view of one edge, borrowed from its [`Graph`](crate::Graph).
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a, E> {
    id: EdgeRef,
    payload: &'a E,
}

impl<'a, E> EdgeView<'a, E> {
    pub(crate) fn new(id: EdgeRef, payload: &'a E) -> Self {
        Self { id, payload }
    }

    /// Handle of the viewed edge.
    #[inline]
    pub fn id(&self) -> EdgeRef {
        self.id
    }

    /// The edge's payload.
    #[inline]
    pub fn payload(&self) -> &'a E {
        self.payload
    }

    /// First endpoint.
    #[inline]
    pub fn head(&self) -> NodeRef {
        self.id.head()
    }

    /// Second endpoint.
    #[inline]
    pub fn tail(&self) -> NodeRef {
        self.id.tail()
    }

    /// The endpoint opposite `node`.
    ///
    /// # Errors
    /// [`GraphError::NotIncident`](crate::GraphError::NotIncident) if `node`
    /// is not an endpoint.
    #[inline]
    pub fn opposite_to(&self, node: NodeRef) -> Result<NodeRef> {
        self.id.opposite_to(node)
    }
}

/// Iterator over the neighbors of a node.
pub struct Neighbors<'a> {
    node: NodeRef,
    edges: slice::Iter<'a, EdgeRef>,
}

impl Iterator for Neighbors<'_> {
    type Item = NodeRef;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node;
        self.edges.find_map(|edge| edge.opposite_to(node).ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.edges.size_hint().1)
    }
}
