//! Declarative network files
//!
//! A network definition is a TOML file listing vertices, edges and houses,
//! optionally preceded by configuration tables. Loading replays the entries
//! through `RoadNetwork::add_vertex`, `add_edge` and `add_house` in that
//! order, so every insertion rule applies. Rejected entries are logged and
//! collected in a `LoadReport`; loading carries on past them.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::NetworkConfig;
use crate::error::{Result, RoadGraphError};
use crate::graph::RoadNetwork;

/// Contents of a network definition file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDefinition {
    #[serde(flatten)]
    pub config: NetworkConfig,

    #[serde(default)]
    pub vertices: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeDefinition>,

    #[serde(default)]
    pub houses: Vec<HouseDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDefinition {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub length: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseDefinition {
    pub id: String,
    pub vertex: String,
}

/// Which kind of entry a rejection came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Vertex,
    Edge,
    House,
}

/// One definition entry the network refused
#[derive(Debug)]
pub struct Rejection {
    pub kind: EntryKind,
    pub id: String,
    pub error: RoadGraphError,
}

/// Summary of replaying a definition
#[derive(Debug, Default)]
pub struct LoadReport {
    pub vertices_added: usize,
    pub edges_added: usize,
    pub houses_added: usize,
    pub rejected: Vec<Rejection>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }

    /// Record the outcome of one insertion. Non-rejection errors abort the load.
    fn record(&mut self, kind: EntryKind, id: &str, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => {
                match kind {
                    EntryKind::Vertex => self.vertices_added += 1,
                    EntryKind::Edge => self.edges_added += 1,
                    EntryKind::House => self.houses_added += 1,
                }
                Ok(())
            }
            Err(error) if error.is_rejection() => {
                warn!(?kind, id, %error, "skipping rejected entry");
                self.rejected.push(Rejection {
                    kind,
                    id: id.to_string(),
                    error,
                });
                Ok(())
            }
            Err(error) => Err(error),
        }
    }
}

impl NetworkDefinition {
    /// Parse a definition from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let definition: NetworkDefinition = toml::from_str(content)?;
        Ok(definition)
    }

    /// Load a definition from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Build a network and replay every entry into it
    pub fn build(&self) -> Result<(RoadNetwork, LoadReport)> {
        let mut network = RoadNetwork::with_config(&self.config)?;
        let mut report = LoadReport::default();

        for id in &self.vertices {
            report.record(EntryKind::Vertex, id, network.add_vertex(id))?;
        }

        for edge in &self.edges {
            let result = network.add_edge(
                &edge.from,
                &edge.to,
                &edge.id,
                &edge.name,
                edge.length,
                edge.weight,
            );
            report.record(EntryKind::Edge, &edge.id, result)?;
        }

        for house in &self.houses {
            let result = network.add_house(&house.id, &house.vertex);
            report.record(EntryKind::House, &house.id, result)?;
        }

        debug!(
            vertices = report.vertices_added,
            edges = report.edges_added,
            houses = report.houses_added,
            rejected = report.rejected.len(),
            "network_loaded"
        );

        Ok((network, report))
    }
}

/// Load a definition file and build its network
pub fn load_network(path: &Path) -> Result<(RoadNetwork, LoadReport)> {
    NetworkDefinition::load(path)?.build()
}
