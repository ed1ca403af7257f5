//! `roadgraph route` command - A* route between two vertices

use crate::cli::{Cli, OutputFormat};
use roadgraph_core::error::{ExitCode, Result};
use roadgraph_core::graph::{HeuristicKind, RoadNetwork, RouteOutcome};

/// Execute the route command. An explicit `heuristic` overrides the one the
/// network file configured.
pub fn execute(
    cli: &Cli,
    network: &RoadNetwork,
    from: &str,
    to: &str,
    heuristic: Option<HeuristicKind>,
) -> Result<ExitCode> {
    let outcome = match heuristic {
        Some(kind) => {
            let heuristic = kind.build(network.search_config().grid_columns);
            network.a_star_with(from, to, heuristic.as_ref())?
        }
        None => network.a_star(from, to)?,
    };

    match cli.format {
        OutputFormat::Json => {
            let output = match &outcome {
                RouteOutcome::Found(route) => serde_json::json!({
                    "from": route.from,
                    "to": route.to,
                    "found": true,
                    "path": route.path,
                    "cost": route.cost,
                }),
                RouteOutcome::NoPathFound { from, to } => serde_json::json!({
                    "from": from,
                    "to": to,
                    "found": false,
                    "path": serde_json::Value::Null,
                    "cost": serde_json::Value::Null,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match &outcome {
            RouteOutcome::Found(route) => {
                println!("{}", route.path.join(" -> "));
                if !cli.quiet {
                    println!("cost: {}", route.cost);
                }
                if cli.verbose {
                    eprintln!(
                        "expanded {} / generated {} / stale {}",
                        route.stats.nodes_expanded,
                        route.stats.nodes_generated,
                        route.stats.stale_skipped
                    );
                }
            }
            RouteOutcome::NoPathFound { from, to } => {
                println!("No path found from {} to {}", from, to);
            }
        },
    }

    Ok(ExitCode::Success)
}
