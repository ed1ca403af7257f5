//! Bounded road network: vertex, edge and house registries plus the
//! adjacency weight matrix that search reads.
//!
//! Every insertion either succeeds completely or returns an error and leaves
//! the network exactly as it was, so a caller can keep going after a
//! rejected insertion.
//!
//! Ids are unique but slots are not: `H1` and `I1` both decode to slot 0 and
//! share its matrix row and column. An edge touching one of them is an edge
//! of the slot, so search treats them as the same place.

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::{AccessRoadConfig, GraphConfig, NetworkConfig, SearchConfig};
use crate::error::{Result, RoadGraphError};
use crate::graph::heuristic::Heuristic;
use crate::graph::matrix::AdjacencyMatrix;
use crate::graph::types::{Cost, EdgeInfo, HouseInfo, Vertex};
use crate::graph::vertex_id::decode_index;

#[derive(Debug, Clone)]
pub struct RoadNetwork {
    capacity: usize,
    /// slot -> ids decoding to it, in registration order
    slots: Vec<Vec<String>>,
    vertices: BTreeMap<String, Vertex>,
    edges: BTreeMap<String, EdgeInfo>,
    houses: BTreeMap<String, HouseInfo>,
    matrix: AdjacencyMatrix,
    access_road: AccessRoadConfig,
    search: SearchConfig,
}

impl RoadNetwork {
    /// Create an empty network with `capacity` vertex slots
    pub fn new(capacity: usize) -> Result<Self> {
        let config = NetworkConfig {
            graph: GraphConfig { capacity },
            ..Default::default()
        };
        Self::with_config(&config)
    }

    /// Create an empty network sized and tuned by `config`
    pub fn with_config(config: &NetworkConfig) -> Result<Self> {
        config.validate()?;
        let capacity = config.graph.capacity;

        debug!(capacity, "create_network");

        Ok(Self {
            capacity,
            slots: vec![Vec::new(); capacity],
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
            houses: BTreeMap::new(),
            matrix: AdjacencyMatrix::new(capacity),
            access_road: config.access_road.clone(),
            search: config.search.clone(),
        })
    }

    /// Register a vertex. No edges are created.
    pub fn add_vertex(&mut self, id: &str) -> Result<()> {
        let index = self.check_new_vertex(id)?;

        self.slots[index].push(id.to_string());
        self.vertices.insert(
            id.to_string(),
            Vertex {
                id: id.to_string(),
                index,
            },
        );

        debug!(id, index, "add_vertex");
        Ok(())
    }

    /// Decide whether `id` may be registered, returning its slot
    fn check_new_vertex(&self, id: &str) -> Result<usize> {
        let index = decode_index(id)?;

        if self.vertices.contains_key(id) {
            return Err(RoadGraphError::DuplicateVertex { id: id.to_string() });
        }

        if index >= self.capacity {
            return Err(RoadGraphError::OutOfRange {
                id: id.to_string(),
                index,
                capacity: self.capacity,
            });
        }

        Ok(index)
    }

    /// Connect two registered vertices with an undirected edge.
    /// Re-connecting a pair overwrites its cost.
    pub fn add_edge(
        &mut self,
        from: &str,
        to: &str,
        edge_id: &str,
        name: &str,
        length: f64,
        weight: f64,
    ) -> Result<()> {
        let (from_index, to_index) = match (self.vertices.get(from), self.vertices.get(to)) {
            (Some(a), Some(b)) => (a.index, b.index),
            _ => {
                return Err(RoadGraphError::MissingEndpoint {
                    from: from.to_string(),
                    to: to.to_string(),
                })
            }
        };

        check_weight(edge_id, weight)?;

        self.matrix
            .set_symmetric(from_index, to_index, Cost::new(weight));
        self.edges.insert(
            edge_id.to_string(),
            EdgeInfo {
                id: edge_id.to_string(),
                name: name.to_string(),
                length,
                weight,
                from: from.to_string(),
                to: to.to_string(),
            },
        );

        debug!(edge_id, from, to, weight, "add_edge");
        Ok(())
    }

    /// Attach a house to a registered road vertex. The house gets its own
    /// vertex and an access road edge `{house}-to-{vertex}`.
    pub fn add_house(&mut self, house_id: &str, vertex_id: &str) -> Result<()> {
        if !self.vertices.contains_key(vertex_id) {
            return Err(RoadGraphError::MissingAttachment {
                house: house_id.to_string(),
                vertex: vertex_id.to_string(),
            });
        }

        // Validate everything up front so a rejected house records nothing
        self.check_new_vertex(house_id)?;
        let access = self.access_road.clone();
        let edge_id = access_edge_id(house_id, vertex_id);
        check_weight(&edge_id, access.weight)?;

        self.houses.insert(
            house_id.to_string(),
            HouseInfo {
                id: house_id.to_string(),
                vertex: vertex_id.to_string(),
            },
        );
        self.add_vertex(house_id)?;
        self.add_edge(
            house_id,
            vertex_id,
            &edge_id,
            &access.name,
            access.length,
            access.weight,
        )?;

        debug!(house_id, vertex_id, "add_house");
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertices.contains_key(id)
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    /// Registered vertex for `id`, or `UnknownVertex`
    pub fn require_vertex(&self, id: &str) -> Result<&Vertex> {
        self.vertices
            .get(id)
            .ok_or_else(|| RoadGraphError::unknown_vertex(id))
    }

    /// First id registered at `slot`
    pub fn vertex_at(&self, slot: usize) -> Option<&str> {
        self.vertices_at(slot).first().map(String::as_str)
    }

    /// Every id registered at `slot`, in registration order
    pub fn vertices_at(&self, slot: usize) -> &[String] {
        self.slots.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Registered vertex ids in slot order
    pub fn vertex_ids(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().flatten().map(String::as_str)
    }

    pub fn edge(&self, edge_id: &str) -> Option<&EdgeInfo> {
        self.edges.get(edge_id)
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeInfo> {
        self.edges.values()
    }

    pub fn house(&self, house_id: &str) -> Option<&HouseInfo> {
        self.houses.get(house_id)
    }

    pub fn houses(&self) -> impl Iterator<Item = &HouseInfo> {
        self.houses.values()
    }

    /// Cost of the direct edge between two registered vertices
    pub fn cost_between(&self, a: &str, b: &str) -> Option<Cost> {
        let a = self.vertices.get(a)?;
        let b = self.vertices.get(b)?;
        self.matrix.get(a.index, b.index)
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// The A* heuristic this network was configured with
    pub fn heuristic(&self) -> Box<dyn Heuristic> {
        self.search.heuristic.build(self.search.grid_columns)
    }
}

fn check_weight(edge_id: &str, weight: f64) -> Result<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(RoadGraphError::InvalidWeight {
            edge_id: edge_id.to_string(),
            weight,
        });
    }
    Ok(())
}

/// Edge id of the access road created for a house
pub fn access_edge_id(house_id: &str, vertex_id: &str) -> String {
    format!("{}-to-{}", house_id, vertex_id)
}
