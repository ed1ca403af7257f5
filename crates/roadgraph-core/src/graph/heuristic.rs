//! Estimates used to order the A* frontier
//!
//! The grid estimate assumes slots are laid out row-major on a fixed-width
//! grid and that each edge costs at least one grid step. It is only
//! admissible when that holds; on networks with cheaper edges between far
//! apart slots A* may return a longer route than Dijkstra. The zero estimate
//! is always admissible and turns A* into uniform-cost search.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoadGraphError;

pub trait Heuristic {
    /// Estimated cost of travelling from slot `from` to slot `to`
    fn estimate(&self, from: usize, to: usize) -> f64;
}

/// Manhattan distance between two slots on a `columns`-wide grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridManhattan {
    columns: usize,
}

impl GridManhattan {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    fn position(&self, slot: usize) -> (usize, usize) {
        (slot / self.columns, slot % self.columns)
    }
}

impl Heuristic for GridManhattan {
    fn estimate(&self, from: usize, to: usize) -> f64 {
        let (from_row, from_col) = self.position(from);
        let (to_row, to_col) = self.position(to);
        (from_row.abs_diff(to_row) + from_col.abs_diff(to_col)) as f64
    }
}

/// Always estimates zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _from: usize, _to: usize) -> f64 {
        0.0
    }
}

/// Selectable heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeuristicKind {
    /// Manhattan distance on the slot grid (default)
    #[default]
    Grid,
    /// No estimate; A* degrades to uniform-cost search
    Zero,
}

impl HeuristicKind {
    pub fn build(self, grid_columns: usize) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::Grid => Box::new(GridManhattan::new(grid_columns)),
            HeuristicKind::Zero => Box::new(ZeroHeuristic),
        }
    }
}

impl FromStr for HeuristicKind {
    type Err = RoadGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(HeuristicKind::Grid),
            "zero" => Ok(HeuristicKind::Zero),
            other => crate::bail_invalid!("heuristic (expected: grid or zero)", other),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicKind::Grid => write!(f, "grid"),
            HeuristicKind::Zero => write!(f, "zero"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_manhattan_on_ten_columns() {
        let grid = GridManhattan::new(10);
        // I1 (slot 0) to I4 (slot 3): same row, three columns apart
        assert_eq!(grid.estimate(0, 3), 3.0);
        // I1 to I12 (slot 11): one row down, one column across
        assert_eq!(grid.estimate(0, 11), 2.0);
        assert_eq!(grid.estimate(11, 0), 2.0);
        assert_eq!(grid.estimate(42, 42), 0.0);
    }

    #[test]
    fn test_grid_manhattan_respects_column_count() {
        let grid = GridManhattan::new(3);
        // slot 4 is (1, 1), slot 0 is (0, 0)
        assert_eq!(grid.estimate(0, 4), 2.0);
    }

    #[test]
    fn test_zero_heuristic() {
        assert_eq!(ZeroHeuristic.estimate(0, 99), 0.0);
    }

    #[test]
    fn test_heuristic_kind_parse() {
        assert_eq!("grid".parse::<HeuristicKind>().unwrap(), HeuristicKind::Grid);
        assert_eq!("ZERO".parse::<HeuristicKind>().unwrap(), HeuristicKind::Zero);
        assert!(matches!(
            "euclid".parse::<HeuristicKind>(),
            Err(RoadGraphError::InvalidValue { .. })
        ));
        assert_eq!(HeuristicKind::Zero.to_string(), "zero");
    }

    #[test]
    fn test_build() {
        assert_eq!(HeuristicKind::Grid.build(10).estimate(0, 3), 3.0);
        assert_eq!(HeuristicKind::Zero.build(10).estimate(0, 3), 0.0);
    }
}
