//! Command dispatch logic for roadgraph

use std::time::Instant;

use crate::cli::Cli;
use roadgraph_core::error::{ExitCode, Result};

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<ExitCode> {
    let ctx = CommandContext::new(cli, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
