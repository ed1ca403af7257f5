//! Graph algorithm implementations
//!
//! Both searches read the adjacency matrix of a `RoadNetwork`:
//! - `dijkstra`: uniform-cost search, minimum cost to every vertex
//! - `astar`: heuristic-guided search for a single route
//! - `shared`: queue entry ordering and path reconstruction

pub mod astar;
pub mod dijkstra;
pub mod shared;

pub use astar::a_star;
pub use dijkstra::dijkstra;
pub use shared::{reconstruct_path, HeapEntry};
