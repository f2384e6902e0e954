//! # `ugraph` - Mutable Undirected Graphs
//!
//! A generic, mutable, undirected graph with node and edge payloads,
//! depth-first and breadth-first traversal, and single-source shortest
//! paths over numeric edge costs.
//!
//! ## Architecture
//!
//! Nodes and edges live in generational arenas owned by the [`Graph`]. Every
//! back-link (a node's incident edges, an edge's endpoints) is a handle into
//! those arenas rather than a reference, so the cyclic node/edge structure
//! has a single owner and removals cannot dangle.
//!
//! 1. **Handles** ([`NodeRef`], [`EdgeRef`]):
//!    - `Copy` values stamped with the owning graph and a slot generation
//!    - stale or foreign handles resolve to an error, never to another entity
//!    - `EdgeRef` equality is structural over the unordered endpoint pair
//!
//! 2. **Container** ([`Graph`]):
//!    - insertion-ordered node and edge collections
//!    - cascading, all-or-nothing removals
//!    - [`Graph::check_consistency`] audits the bidirectional links
//!
//! 3. **Algorithms** ([`graph::algorithms`]):
//!    - [`depth_first`] / [`breadth_first`] report reached nodes, crossed
//!      edges and unreachable nodes
//!    - [`dijkstra`] / [`shortest_path_cost`] read edge payloads as costs via
//!      [`num_traits::ToPrimitive`]
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for mutations (`debug`), traversal and
//!   relaxation steps (`trace`) and invariant violations (`warn`).
//!
//! ## Example
//!
//! ```rust
//! use ugraph::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.add_node("A");
//! let b = graph.add_node("B");
//! let c = graph.add_node("C");
//! graph.add_edge(4.0, a, b).unwrap();
//! graph.add_edge(1.0, a, c).unwrap();
//! graph.add_edge(2.0, c, b).unwrap();
//!
//! assert_eq!(graph.shortest_path_cost(a, b).unwrap(), 3.0);
//!
//! let bfs = graph.breadth_first_traversal(a).unwrap();
//! assert_eq!(bfs.visited().len(), 3);
//! assert!(bfs.unreachable().is_empty());
//! ```
//!
//! ## Threading
//!
//! A graph is a plain single-owner value. Mutation takes `&mut self`, so
//! concurrent mutation is ruled out by the borrow checker; callers sharing a
//! graph across threads wrap it in their own lock.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod alloc;
pub mod error;
pub mod graph;
mod trace;

pub use error::{GraphError, Result};
pub use graph::algorithms::{
    breadth_first, depth_first, depth_first_into, dijkstra, shortest_path_cost, ShortestPaths,
    Traversal,
};
pub use graph::{EdgeRef, EdgeView, Graph, GraphDisplay, Neighbors, NodeRef, NodeView, Violation};

// Handles are passed by value everywhere; keep them small.
const _: () = {
    use core::mem;

    assert!(mem::size_of::<NodeRef>() == 12);
    assert!(mem::size_of::<EdgeRef>() <= 32);
};
