//! CLI commands for roadgraph

pub mod check;
pub mod dispatch;
pub mod distances;
pub mod house;
pub mod route;
