//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::error::MAX_CAPACITY;
use crate::graph::heuristic::HeuristicKind;

/// Default column count of the grid the A* heuristic lays slots out on
pub const DEFAULT_GRID_COLUMNS: usize = 10;

/// Default display name of the edge created for a house
pub const ACCESS_ROAD_NAME: &str = "Access Road";

/// Network configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Graph sizing
    #[serde(default)]
    pub graph: GraphConfig,

    /// Heuristic-guided search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Access roads synthesized for houses
    #[serde(default)]
    pub access_road: AccessRoadConfig,
}

/// Configuration for the vertex space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Number of vertex slots (at most 100)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

/// Configuration for A*
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Estimate used to order the A* frontier
    #[serde(default)]
    pub heuristic: HeuristicKind,

    /// Columns of the grid that slots are laid out on for the grid heuristic
    #[serde(default = "default_grid_columns")]
    pub grid_columns: usize,
}

/// Configuration for the edge connecting a house to its road vertex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessRoadConfig {
    #[serde(default = "default_access_road_name")]
    pub name: String,

    /// Informational length, not used by search
    #[serde(default = "default_access_road_cost")]
    pub length: f64,

    /// Search cost of the access road
    #[serde(default = "default_access_road_cost")]
    pub weight: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicKind::default(),
            grid_columns: default_grid_columns(),
        }
    }
}

impl Default for AccessRoadConfig {
    fn default() -> Self {
        Self {
            name: default_access_road_name(),
            length: default_access_road_cost(),
            weight: default_access_road_cost(),
        }
    }
}

fn default_capacity() -> usize {
    MAX_CAPACITY
}

fn default_grid_columns() -> usize {
    DEFAULT_GRID_COLUMNS
}

fn default_access_road_name() -> String {
    ACCESS_ROAD_NAME.to_string()
}

fn default_access_road_cost() -> f64 {
    1.0
}
