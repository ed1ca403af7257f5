//! Command implementations for all roadgraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use roadgraph_core::error::{ExitCode, Result};

use super::macros::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<ExitCode> {
        let code = match self {
            Commands::Distances { start } => {
                let network = ctx.query_network()?;
                crate::commands::distances::execute(ctx.cli, &network, start)?
            }
            Commands::Route {
                from,
                to,
                heuristic,
            } => {
                let network = ctx.query_network()?;
                crate::commands::route::execute(ctx.cli, &network, from, to, *heuristic)?
            }
            Commands::House { house, destination } => {
                let network = ctx.query_network()?;
                crate::commands::house::execute(ctx.cli, &network, house, destination)?
            }
            Commands::Check => {
                let (network, report) = ctx.load_network()?;
                crate::commands::check::execute(ctx.cli, &network, &report)?
            }
        };

        trace_command!(ctx.cli, ctx.start, "execute_command");
        Ok(code)
    }
}
