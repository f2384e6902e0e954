//! Entity storage.
//!
//! Nodes and edges live in generational arenas owned by the graph; every
//! cross-reference between entities is an index into one of them.

pub(crate) mod generational_arena;

pub use generational_arena::ArenaIndex;
pub(crate) use generational_arena::GenerationalArena;
