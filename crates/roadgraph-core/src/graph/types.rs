use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Index;

/// Accumulated cost of travelling along one or more edges.
/// `Cost::INFINITY` is the sentinel for "unreachable".
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Total order over costs, used by the search queues
    pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<u32> for Cost {
    fn from(cost: u32) -> Self {
        Cost(cost as f64)
    }
}

impl PartialEq<f64> for Cost {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "unreachable")
        }
    }
}

// JSON has no infinity, so unreachable costs serialize as null
impl Serialize for Cost {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// A registered vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex {
    pub id: String,
    /// Zero-based matrix slot decoded from the id
    pub index: usize,
}

/// Metadata for an undirected edge. Only `weight` is consulted by search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeInfo {
    pub id: String,
    pub name: String,
    pub length: f64,
    pub weight: f64,
    pub from: String,
    pub to: String,
}

/// A house and the road vertex its access road connects to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HouseInfo {
    pub id: String,
    pub vertex: String,
}

/// Counters collected while a search runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// How many entries were popped from the priority queue and expanded
    pub nodes_expanded: usize,
    /// How many entries were pushed onto the priority queue
    pub nodes_generated: usize,
    /// How many popped entries were outdated and skipped
    pub stale_skipped: usize,
}

/// Result of a uniform-cost search: the minimum cost from `source` to every
/// registered vertex, in slot order. Unreachable vertices hold `Cost::INFINITY`.
#[derive(Debug, Clone, Serialize)]
pub struct Distances {
    pub source: String,
    pub costs: Vec<(String, Cost)>,
    #[serde(skip)]
    pub stats: SearchStats,
}

impl Distances {
    pub fn get(&self, id: &str) -> Option<Cost> {
        self.costs
            .iter()
            .find(|(vertex, _)| vertex == id)
            .map(|(_, cost)| *cost)
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Cost)> {
        self.costs.iter().map(|(id, cost)| (id.as_str(), *cost))
    }

    /// Vertices with a finite cost from the source
    pub fn reachable(&self) -> impl Iterator<Item = (&str, Cost)> {
        self.iter().filter(|(_, cost)| cost.is_finite())
    }
}

impl Index<&str> for Distances {
    type Output = Cost;

    fn index(&self, id: &str) -> &Cost {
        self.costs
            .iter()
            .find(|(vertex, _)| vertex == id)
            .map(|(_, cost)| cost)
            .unwrap_or_else(|| panic!("vertex {} is not in the distance map", id))
    }
}

/// A path found by heuristic-guided search
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    /// Vertex ids from `from` to `to`, both inclusive
    pub path: Vec<String>,
    pub cost: Cost,
    #[serde(skip)]
    pub stats: SearchStats,
}

/// Outcome of a single-destination search
#[derive(Debug, Clone, PartialEq)]
pub enum RouteOutcome {
    Found(Route),
    NoPathFound { from: String, to: String },
}

impl RouteOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoPathFound { .. } => None,
        }
    }

    pub fn into_path(self) -> Option<Vec<String>> {
        match self {
            RouteOutcome::Found(route) => Some(route.path),
            RouteOutcome::NoPathFound { .. } => None,
        }
    }
}

/// Outcome of a house query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HouseDistance {
    /// Cost from the house to the destination (may be `Cost::INFINITY`)
    Reached(Cost),
    /// The house id was never attached to the network
    NoStartingPoint,
}

impl HouseDistance {
    pub fn cost(&self) -> Option<Cost> {
        match self {
            HouseDistance::Reached(cost) => Some(*cost),
            HouseDistance::NoStartingPoint => None,
        }
    }
}
