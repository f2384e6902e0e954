//! Node and edge handles.
//!
//! Handles are small `Copy` values that name an entity inside one specific
//! [`Graph`](crate::Graph). They never own anything; the graph's arenas do.
//!
//! # Equality
//! - [`NodeRef`] equality is identity: two nodes with equal payloads are
//!   still different nodes.
//! - [`EdgeRef`] equality and hashing are **structural**: an edge compares
//!   equal to any edge joining the same unordered pair of endpoints, whatever
//!   its payload. A `HashSet<EdgeRef>` or `HashMap<EdgeRef, _>` therefore
//!   collapses parallel edges into one entry. Use [`EdgeRef::same_entity`]
//!   when the distinction matters.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::sync::atomic::{AtomicU32, Ordering};

use crate::alloc::ArenaIndex;
use crate::error::{GraphError, Result};

static NEXT_GRAPH_ID: AtomicU32 = AtomicU32::new(0);

/// Process-unique tag stamped into every handle a graph hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct GraphId(u32);

impl GraphId {
    pub(crate) fn fresh() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeRef {
    graph: GraphId,
    index: ArenaIndex,
}

impl NodeRef {
    #[inline]
    pub(crate) fn new(graph: GraphId, index: ArenaIndex) -> Self {
        Self { graph, index }
    }

    #[inline]
    pub(crate) fn graph(self) -> GraphId {
        self.graph
    }

    #[inline]
    pub(crate) fn index(self) -> ArenaIndex {
        self.index
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index.generation() {
            0 => write!(f, "n{}", self.index.slot()),
            g => write!(f, "n{}v{}", self.index.slot(), g),
        }
    }
}

/// Handle to an undirected edge.
///
/// `head` and `tail` only record the argument order given to
/// [`Graph::add_edge`](crate::Graph::add_edge); they carry no direction.
#[derive(Debug, Clone, Copy)]
pub struct EdgeRef {
    index: ArenaIndex,
    head: NodeRef,
    tail: NodeRef,
}

impl EdgeRef {
    #[inline]
    pub(crate) fn new(index: ArenaIndex, head: NodeRef, tail: NodeRef) -> Self {
        Self { index, head, tail }
    }

    #[inline]
    pub(crate) fn index(self) -> ArenaIndex {
        self.index
    }

    /// First endpoint as passed to `add_edge`.
    #[inline]
    pub fn head(self) -> NodeRef {
        self.head
    }

    /// Second endpoint as passed to `add_edge`.
    #[inline]
    pub fn tail(self) -> NodeRef {
        self.tail
    }

    /// Both endpoints, `(head, tail)`.
    #[inline]
    pub fn endpoints(self) -> (NodeRef, NodeRef) {
        (self.head, self.tail)
    }

    /// Returns `true` if `node` is one of the two endpoints.
    #[inline]
    pub fn touches(self, node: NodeRef) -> bool {
        self.head == node || self.tail == node
    }

    /// Returns `true` if this edge joins exactly `a` and `b`, in either order.
    #[inline]
    pub fn joins(self, a: NodeRef, b: NodeRef) -> bool {
        (self.head == a && self.tail == b) || (self.head == b && self.tail == a)
    }

    /// Returns the endpoint on the other side of `node`.
    ///
    /// # Errors
    /// [`GraphError::NotIncident`] if `node` is not an endpoint of this edge.
    pub fn opposite_to(self, node: NodeRef) -> Result<NodeRef> {
        if node == self.head {
            Ok(self.tail)
        } else if node == self.tail {
            Ok(self.head)
        } else {
            Err(GraphError::NotIncident { edge: self, node })
        }
    }

    /// Allocation identity: `true` only if both handles name the very same
    /// edge entity, unlike `==` which compares endpoint pairs.
    #[inline]
    pub fn same_entity(&self, other: &EdgeRef) -> bool {
        self.index == other.index && self.head.graph == other.head.graph
    }

    /// Endpoints ordered so the pair is independent of `head`/`tail` order.
    #[inline]
    fn unordered(self) -> (NodeRef, NodeRef) {
        if self.head <= self.tail {
            (self.head, self.tail)
        } else {
            (self.tail, self.head)
        }
    }
}

impl PartialEq for EdgeRef {
    fn eq(&self, other: &Self) -> bool {
        self.joins(other.head, other.tail)
    }
}

impl Eq for EdgeRef {}

impl Hash for EdgeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unordered().hash(state);
    }
}

impl fmt::Display for EdgeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.head, self.tail)
    }
}
