//! CLI argument parsing for roadgraph
//!
//! Global flags: --network, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roadgraph_core::graph::HeuristicKind;
pub use output::OutputFormat;
use parse::parse_heuristic;

/// Roadgraph - shortest paths over a bounded road network
#[derive(Parser, Debug)]
#[command(name = "roadgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network definition file (TOML)
    #[arg(long, short = 'n', global = true, env = "ROADGRAPH_NETWORK")]
    pub network: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging and search statistics
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (error, warn, info, debug, trace, or a full directive)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Minimum cost from a vertex to every registered vertex
    Distances {
        /// Source vertex id
        start: String,
    },

    /// Cheapest route between two vertices (A*)
    Route {
        /// Start vertex id
        from: String,

        /// Destination vertex id
        to: String,

        /// Heuristic to order the search by (defaults to the network's setting)
        #[arg(long, value_parser = parse_heuristic)]
        heuristic: Option<HeuristicKind>,
    },

    /// Cost from a house to a destination, including its access road
    House {
        /// House id
        house: String,

        /// Destination vertex id
        destination: String,
    },

    /// Load the network and report rejected entries
    Check,
}
