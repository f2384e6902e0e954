//! The `Graph` container: a mutable undirected graph with arena-backed entities.
//!
//! Nodes and edges live in two generational arenas. Every node keeps an
//! ordered list of its incident edges, and the graph keeps both collections
//! in insertion order. All cross-references are handles, so removing an
//! entity can never leave a dangling pointer behind: at worst a stale handle
//! stops resolving.
//!
//! # Invariants
//! After every public call:
//! 1. every edge in the edge collection is in the incident list of both endpoints;
//! 2. every incident-list entry is in the edge collection and touches its node;
//! 3. both endpoints of every edge are in the node collection;
//! 4. removals cascade, leaving no incident entry behind.
//!
//! [`Graph::check_consistency`] walks these and reports any breakage.
//!
//! # Performance
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `add_node` | \(O(1)\) amortized | |
//! | `add_edge` | \(O(1)\) amortized | appends to both incident lists |
//! | `remove_edge` | \(O(E + \deg)\) | keeps the edge collection ordered |
//! | `remove_node` | \(O(\deg \cdot (E + \deg) + V)\) | cascades over incident edges |
//! | `edge_between` / `edge_to` | \(O(\deg)\) | scans one incident list |

use std::collections::HashSet;

use crate::alloc::GenerationalArena;
use crate::error::{GraphError, Result};
use crate::graph::handle::{EdgeRef, GraphId, NodeRef};
use crate::graph::view::{EdgeView, Neighbors, NodeView};
use crate::trace::graph_event;

/// Internal node record.
pub(super) struct NodeData<N> {
    pub(super) payload: N,
    /// Incident edges in the order they were attached.
    pub(super) incident: Vec<EdgeRef>,
}

/// A mutable, undirected graph with node payloads `N` and edge payloads `E`.
///
/// Entities are created only through [`add_node`](Self::add_node) and
/// [`add_edge`](Self::add_edge); the graph is their sole owner. Payloads are
/// opaque except for the shortest-path engine, which reads edge payloads as
/// costs through [`num_traits::ToPrimitive`].
///
/// Self-loops are rejected with [`GraphError::SelfLoop`]. Parallel edges are
/// stored, but note that [`EdgeRef`] compares structurally.
///
/// # Example
///
/// ```rust
/// use ugraph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_node("A");
/// let b = graph.add_node("B");
/// let ab = graph.add_edge(3.0, a, b).unwrap();
///
/// assert_eq!(graph.edge_between(b, a), Some(ab));
/// assert!(graph.check_consistency().is_empty());
///
/// graph.remove_node(a).unwrap();
/// assert_eq!(graph.edge_count(), 0);
/// ```
pub struct Graph<N, E> {
    pub(super) id: GraphId,
    pub(super) nodes: GenerationalArena<NodeData<N>>,
    pub(super) edges: GenerationalArena<E>,
    pub(super) node_order: Vec<NodeRef>,
    pub(super) edge_order: Vec<EdgeRef>,
}

impl<N, E> Graph<N, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            id: GraphId::fresh(),
            nodes: GenerationalArena::new(),
            edges: GenerationalArena::new(),
            node_order: Vec::new(),
            edge_order: Vec::new(),
        }
    }

    /// Creates an empty graph with room for `nodes` nodes and `edges` edges.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            id: GraphId::fresh(),
            nodes: GenerationalArena::with_capacity(nodes),
            edges: GenerationalArena::with_capacity(edges),
            node_order: Vec::with_capacity(nodes),
            edge_order: Vec::with_capacity(edges),
        }
    }

    // ---------------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------------

    /// Adds an isolated node carrying `payload`.
    ///
    /// # Panics
    /// Panics if the graph would hold more than `u32::MAX` node slots.
    pub fn add_node(&mut self, payload: N) -> NodeRef {
        let index = self.nodes.insert(NodeData {
            payload,
            incident: Vec::new(),
        });
        let node = NodeRef::new(self.id, index);
        self.node_order.push(node);
        graph_event!(debug, %node, "node added");
        node
    }

    /// Adds an edge between `a` and `b` carrying `payload`.
    ///
    /// The edge is appended to the edge collection and to the incident lists
    /// of both endpoints.
    ///
    /// # Errors
    /// - [`GraphError::NodeNotFound`] if either endpoint is not in this graph.
    /// - [`GraphError::SelfLoop`] if `a == b`.
    ///
    /// # Panics
    /// Panics if the graph would hold more than `u32::MAX` edge slots.
    pub fn add_edge(&mut self, payload: E, a: NodeRef, b: NodeRef) -> Result<EdgeRef> {
        self.node_data(a)?;
        self.node_data(b)?;
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }

        let edge = EdgeRef::new(self.edges.insert(payload), a, b);
        self.edge_order.push(edge);
        for end in [a, b] {
            if let Some(data) = self.nodes.get_mut(end.index()) {
                data.incident.push(edge);
            }
        }
        graph_event!(debug, %edge, "edge added");
        Ok(edge)
    }

    /// Removes `edge`, detaching it from both endpoints, and returns its payload.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if the edge is not currently owned by this
    /// graph. Nothing is modified in that case.
    pub fn remove_edge(&mut self, edge: EdgeRef) -> Result<E> {
        if !self.contains_edge(edge) {
            return Err(GraphError::edge_not_found(edge));
        }
        self.detach_edge(edge)
            .ok_or_else(|| GraphError::edge_not_found(edge))
    }

    /// Removes the first edge found between `a` and `b` and returns its payload.
    ///
    /// # Errors
    /// - [`GraphError::NodeNotFound`] if either node is not in this graph.
    /// - [`GraphError::EdgeNotFound`] if the nodes are not adjacent.
    pub fn remove_edge_between(&mut self, a: NodeRef, b: NodeRef) -> Result<E> {
        self.node_data(b)?;
        let edge = self
            .node(a)?
            .edge_to(b)
            .ok_or(GraphError::EdgeNotFound { a, b })?;
        self.remove_edge(edge)
    }

    /// Removes `node` together with every edge incident to it, and returns
    /// the node's payload.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if the node is not in this graph.
    pub fn remove_node(&mut self, node: NodeRef) -> Result<N> {
        // Detaching mutates the list being walked, so walk a snapshot.
        let incident = self.node_data(node)?.incident.clone();
        for edge in incident {
            self.detach_edge(edge);
        }

        if let Some(pos) = self.node_order.iter().position(|&n| n == node) {
            self.node_order.remove(pos);
        }
        let data = self
            .nodes
            .remove(node.index())
            .ok_or(GraphError::NodeNotFound(node))?;
        graph_event!(debug, %node, "node removed");
        Ok(data.payload)
    }

    /// Removes every node and edge. Previously issued handles stop resolving.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.node_order.clear();
        self.edge_order.clear();
        graph_event!(debug, "graph cleared");
    }

    /// Replaces the payload of `node`, returning the old one.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if the node is not in this graph.
    pub fn set_node_payload(&mut self, node: NodeRef, payload: N) -> Result<N> {
        Ok(std::mem::replace(self.node_payload_mut(node)?, payload))
    }

    /// Replaces the payload of `edge`, returning the old one.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if the edge is not in this graph.
    pub fn set_edge_payload(&mut self, edge: EdgeRef, payload: E) -> Result<E> {
        Ok(std::mem::replace(self.edge_payload_mut(edge)?, payload))
    }

    /// Mutable access to a node payload.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if the node is not in this graph.
    pub fn node_payload_mut(&mut self, node: NodeRef) -> Result<&mut N> {
        if node.graph() != self.id {
            return Err(GraphError::NodeNotFound(node));
        }
        self.nodes
            .get_mut(node.index())
            .map(|data| &mut data.payload)
            .ok_or(GraphError::NodeNotFound(node))
    }

    /// Mutable access to an edge payload.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if the edge is not in this graph.
    pub fn edge_payload_mut(&mut self, edge: EdgeRef) -> Result<&mut E> {
        if edge.head().graph() != self.id {
            return Err(GraphError::edge_not_found(edge));
        }
        self.edges
            .get_mut(edge.index())
            .ok_or_else(|| GraphError::edge_not_found(edge))
    }

    /// Unlinks `edge` from both incident lists and the edge collection.
    ///
    /// Callers check ownership first; on an owned edge this cannot fail halfway.
    fn detach_edge(&mut self, edge: EdgeRef) -> Option<E> {
        for end in [edge.head(), edge.tail()] {
            if let Some(data) = self.nodes.get_mut(end.index()) {
                if let Some(pos) = data.incident.iter().position(|e| e.same_entity(&edge)) {
                    data.incident.remove(pos);
                }
            }
        }
        if let Some(pos) = self.edge_order.iter().position(|e| e.same_entity(&edge)) {
            self.edge_order.remove(pos);
        }
        graph_event!(debug, %edge, "edge removed");
        self.edges.remove(edge.index())
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// All nodes in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[NodeRef] {
        &self.node_order
    }

    /// All edges in insertion order.
    #[inline]
    pub fn edges(&self) -> &[EdgeRef] {
        &self.edge_order
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.node_order.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edge_order.len()
    }

    /// Returns `true` if the graph has no nodes (and therefore no edges).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.node_order.is_empty()
    }

    /// The `i`-th node in insertion order.
    #[inline]
    pub fn node_at(&self, i: usize) -> Option<NodeRef> {
        self.node_order.get(i).copied()
    }

    /// The `i`-th edge in insertion order.
    #[inline]
    pub fn edge_at(&self, i: usize) -> Option<EdgeRef> {
        self.edge_order.get(i).copied()
    }

    /// Returns `true` if `node` is currently owned by this graph.
    #[inline]
    pub fn contains_node(&self, node: NodeRef) -> bool {
        node.graph() == self.id && self.nodes.contains(node.index())
    }

    /// Returns `true` if `edge` (this very entity) is currently owned by this graph.
    #[inline]
    pub fn contains_edge(&self, edge: EdgeRef) -> bool {
        edge.head().graph() == self.id && self.edges.contains(edge.index())
    }

    /// Borrowed view of a node.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if the node is not in this graph.
    pub fn node(&self, node: NodeRef) -> Result<NodeView<'_, N>> {
        let data = self.node_data(node)?;
        Ok(NodeView::new(node, &data.payload, &data.incident))
    }

    /// Borrowed view of an edge.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if the edge is not in this graph.
    pub fn edge(&self, edge: EdgeRef) -> Result<EdgeView<'_, E>> {
        Ok(EdgeView::new(edge, self.edge_payload(edge)?))
    }

    /// Payload of `node`.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if the node is not in this graph.
    pub fn node_payload(&self, node: NodeRef) -> Result<&N> {
        self.node_data(node).map(|data| &data.payload)
    }

    /// Payload of `edge`.
    ///
    /// # Errors
    /// [`GraphError::EdgeNotFound`] if the edge is not in this graph.
    pub fn edge_payload(&self, edge: EdgeRef) -> Result<&E> {
        if edge.head().graph() != self.id {
            return Err(GraphError::edge_not_found(edge));
        }
        self.edges
            .get(edge.index())
            .ok_or_else(|| GraphError::edge_not_found(edge))
    }

    /// Incident edges of `node`, in attachment order.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if the node is not in this graph.
    pub fn incident_edges(&self, node: NodeRef) -> Result<&[EdgeRef]> {
        self.node_data(node).map(|data| data.incident.as_slice())
    }

    /// Neighbors of `node`, one per incident edge, in attachment order.
    /// An isolated node yields an empty iterator.
    ///
    /// # Errors
    /// [`GraphError::NodeNotFound`] if the node is not in this graph.
    pub fn neighbors(&self, node: NodeRef) -> Result<Neighbors<'_>> {
        self.node(node).map(|view| view.neighbors())
    }

    /// First edge in `node`'s incident list that touches `neighbor`.
    ///
    /// Returns `None` when the nodes are not adjacent or `node` is unknown.
    pub fn edge_to(&self, node: NodeRef, neighbor: NodeRef) -> Option<EdgeRef> {
        self.node(node).ok()?.edge_to(neighbor)
    }

    /// Returns `true` if an edge joins `node` and `other`.
    pub fn is_neighbor(&self, node: NodeRef, other: NodeRef) -> bool {
        self.edge_to(node, other).is_some()
    }

    /// The edge joining `a` and `b` in either orientation, if any.
    ///
    /// Scans `a`'s incident list, so the cost is \(O(\deg a)\).
    pub fn edge_between(&self, a: NodeRef, b: NodeRef) -> Option<EdgeRef> {
        self.incident(a).iter().copied().find(|e| e.joins(a, b))
    }

    /// Every node of the graph not in `excluded`, in insertion order.
    pub fn nodes_excluding(&self, excluded: &HashSet<NodeRef>) -> Vec<NodeRef> {
        self.node_order
            .iter()
            .copied()
            .filter(|node| !excluded.contains(node))
            .collect()
    }

    pub(super) fn node_data(&self, node: NodeRef) -> Result<&NodeData<N>> {
        if node.graph() != self.id {
            return Err(GraphError::NodeNotFound(node));
        }
        self.nodes
            .get(node.index())
            .ok_or(GraphError::NodeNotFound(node))
    }

    /// Incident list of `node`, empty if the node is unknown.
    #[inline]
    pub(crate) fn incident(&self, node: NodeRef) -> &[EdgeRef] {
        self.node_data(node)
            .map(|data| data.incident.as_slice())
            .unwrap_or_default()
    }
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new()
    }
}
