//! Network configuration for roadgraph
//!
//! Configuration is read from TOML, either a standalone file or the
//! `[graph]`, `[search]` and `[access_road]` tables of a network definition.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, RoadGraphError, MAX_CAPACITY};

pub use types::{
    AccessRoadConfig, GraphConfig, NetworkConfig, SearchConfig, ACCESS_ROAD_NAME,
    DEFAULT_GRID_COLUMNS,
};

impl NetworkConfig {
    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if self.graph.capacity > MAX_CAPACITY {
            return Err(RoadGraphError::CapacityExceeded {
                requested: self.graph.capacity,
                max: MAX_CAPACITY,
            });
        }

        if self.search.grid_columns == 0 {
            crate::bail_invalid!("search.grid_columns", self.search.grid_columns);
        }

        let weight = self.access_road.weight;
        if !weight.is_finite() || weight < 0.0 {
            crate::bail_invalid!("access_road.weight", weight);
        }

        Ok(())
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: NetworkConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RoadGraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }
}
