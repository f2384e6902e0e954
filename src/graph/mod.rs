//! The undirected graph and its algorithms.
//!
//! Organized leaf first:
//! - `handle`: node and edge identity
//! - `undirected`: the [`Graph`] container
//! - `view`: borrowed node and edge accessors
//! - `consistency`: invariant checking
//! - `display`: text dump
//! - `algorithms`: traversals and shortest paths

pub mod algorithms;
mod consistency;
mod display;
mod handle;
mod undirected;
mod view;

pub use consistency::Violation;
pub use display::GraphDisplay;
pub use handle::{EdgeRef, NodeRef};
pub use undirected::Graph;
pub use view::{EdgeView, Neighbors, NodeView};
