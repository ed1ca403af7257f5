//! Roadgraph Core Library
//!
//! A bounded road network stored as an adjacency weight matrix, with
//! Dijkstra and A* searches over it and house-to-destination queries.

pub mod config;
pub mod definition;
pub mod error;
pub mod graph;
pub mod logging;
