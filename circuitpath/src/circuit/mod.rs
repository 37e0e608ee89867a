//! Circuit Graph Model
//!
//! Components are the nodes of an undirected graph and connections carry a
//! resistance as their weight. The graph is simple: no self-connections and
//! at most one connection per unordered pair.

pub mod analysis;
pub mod graph;
pub mod schema;

pub use analysis::CircuitStats;
pub use graph::{CircuitGraph, GraphError, DEFAULT_WEIGHT};
pub use schema::*;
