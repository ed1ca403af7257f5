//! Road network graph and path-finding operations
//!
//! Provides the bounded road network and the searches over it:
//! - `RoadNetwork` owns the vertex, edge and house registries and the
//!   adjacency weight matrix
//! - Dijkstra for minimum costs from one vertex to all others
//! - A* for a single route, ordered by a pluggable heuristic
//! - House queries composed from the above

pub mod algos;
pub mod heuristic;
pub mod house;
pub mod matrix;
pub mod network;
pub mod types;
pub mod vertex_id;

pub use algos::{a_star, dijkstra};
pub use heuristic::{GridManhattan, Heuristic, HeuristicKind, ZeroHeuristic};
pub use house::shortest_path_to_house;
pub use matrix::AdjacencyMatrix;
pub use network::RoadNetwork;
pub use types::{
    Cost, Distances, EdgeInfo, HouseDistance, HouseInfo, Route, RouteOutcome, SearchStats, Vertex,
};

use crate::error::Result;

impl RoadNetwork {
    /// Minimum cost from `start` to every registered vertex
    pub fn dijkstra(&self, start: &str) -> Result<Distances> {
        algos::dijkstra(self, start)
    }

    /// Route from `start` to `end` using the configured heuristic
    pub fn a_star(&self, start: &str, end: &str) -> Result<RouteOutcome> {
        let heuristic = self.heuristic();
        algos::a_star(self, start, end, heuristic.as_ref())
    }

    /// Route from `start` to `end` using an explicit heuristic
    pub fn a_star_with(
        &self,
        start: &str,
        end: &str,
        heuristic: &dyn Heuristic,
    ) -> Result<RouteOutcome> {
        algos::a_star(self, start, end, heuristic)
    }

    /// Cost from a house to `destination`, including its access road
    pub fn shortest_path_to_house(&self, house_id: &str, destination: &str) -> Result<HouseDistance> {
        house::shortest_path_to_house(self, house_id, destination)
    }
}
