//! `roadgraph house` command - cost from a house to a destination

use crate::cli::{Cli, OutputFormat};
use roadgraph_core::error::{ExitCode, Result};
use roadgraph_core::graph::{HouseDistance, RoadNetwork};

/// Execute the house command
pub fn execute(
    cli: &Cli,
    network: &RoadNetwork,
    house: &str,
    destination: &str,
) -> Result<ExitCode> {
    let distance = network.shortest_path_to_house(house, destination)?;

    match cli.format {
        OutputFormat::Json => {
            let output = match distance {
                HouseDistance::Reached(cost) => serde_json::json!({
                    "house": house,
                    "destination": destination,
                    "status": if cost.is_finite() { "reached" } else { "unreachable" },
                    "cost": cost,
                }),
                HouseDistance::NoStartingPoint => serde_json::json!({
                    "house": house,
                    "destination": destination,
                    "status": "no_starting_point",
                    "cost": serde_json::Value::Null,
                }),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match distance {
            HouseDistance::Reached(cost) if cli.quiet => println!("{}", cost),
            HouseDistance::Reached(cost) => {
                println!("{} -> {}: {}", house, destination, cost)
            }
            HouseDistance::NoStartingPoint => {
                println!("No starting point: house {} is not on the network", house)
            }
        },
    }

    Ok(ExitCode::Success)
}
