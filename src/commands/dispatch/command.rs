//! Command trait and context for dispatching commands

use std::time::Instant;

use tracing::warn;

use crate::cli::Cli;
use roadgraph_core::bail_usage;
use roadgraph_core::definition::{load_network, LoadReport};
use roadgraph_core::error::{ExitCode, Result};
use roadgraph_core::graph::RoadNetwork;

use super::macros::trace_command;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Load the network named by `--network` and replay its definition
    pub fn load_network(&self) -> Result<(RoadNetwork, LoadReport)> {
        let Some(path) = &self.cli.network else {
            bail_usage!("no network file given (use --network or ROADGRAPH_NETWORK)");
        };

        let loaded = load_network(path)?;
        trace_command!(self.cli, self.start, "load_network");
        Ok(loaded)
    }

    /// Load the network for a query. Rejected entries are already logged by
    /// the loader; the query runs against whatever was accepted.
    pub fn query_network(&self) -> Result<RoadNetwork> {
        let (network, report) = self.load_network()?;
        if !report.is_clean() {
            warn!(
                rejected = report.rejected.len(),
                "network loaded with rejected entries (run `roadgraph check` for details)"
            );
        }
        Ok(network)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<ExitCode> {
        println!("roadgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths over a bounded road network.");
        println!();
        println!("Run `roadgraph --help` for usage information.");
        Ok(ExitCode::Success)
    }
}
