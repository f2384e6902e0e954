//! Read-only algorithms over [`Graph`](crate::Graph).
//!
//! - `traversal`: depth-first and breadth-first traversal
//! - `dijkstra`: single-source shortest paths over numeric edge payloads

pub mod dijkstra;
pub mod traversal;

pub use dijkstra::{dijkstra, shortest_path_cost, ShortestPaths};
pub use traversal::{breadth_first, depth_first, depth_first_into, Traversal};
