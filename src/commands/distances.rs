//! `roadgraph distances` command - uniform-cost distance map
//!
//! - `roadgraph distances <start>` - minimum cost from `start` to every
//!   registered vertex, in slot order

use crate::cli::{Cli, OutputFormat};
use roadgraph_core::error::{ExitCode, Result};
use roadgraph_core::graph::{Distances, RoadNetwork};

/// Execute the distances command
pub fn execute(cli: &Cli, network: &RoadNetwork, start: &str) -> Result<ExitCode> {
    let distances = network.dijkstra(start)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&to_json(&distances))?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Distances from {}", distances.source);
            }
            let width = distances.iter().map(|(id, _)| id.len()).max().unwrap_or(0);
            for (id, cost) in distances.iter() {
                println!("  {:<width$}  {}", id, cost, width = width);
            }
            if cli.verbose {
                eprintln!(
                    "expanded {} / generated {} / stale {}",
                    distances.stats.nodes_expanded,
                    distances.stats.nodes_generated,
                    distances.stats.stale_skipped
                );
            }
        }
    }

    Ok(ExitCode::Success)
}

fn to_json(distances: &Distances) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = distances
        .iter()
        .map(|(id, cost)| {
            serde_json::json!({
                "vertex": id,
                "cost": cost,
                "reachable": cost.is_finite(),
            })
        })
        .collect();

    serde_json::json!({
        "source": distances.source,
        "distances": entries,
    })
}
