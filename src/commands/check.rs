//! `roadgraph check` command - validate a network file
//!
//! Replays the definition and lists every rejected entry. Exits with the
//! data error code when anything was rejected.

use crate::cli::{Cli, OutputFormat};
use roadgraph_core::definition::{EntryKind, LoadReport};
use roadgraph_core::error::{ExitCode, Result};
use roadgraph_core::graph::RoadNetwork;

/// Execute the check command
pub fn execute(cli: &Cli, network: &RoadNetwork, report: &LoadReport) -> Result<ExitCode> {
    match cli.format {
        OutputFormat::Json => {
            let rejected: Vec<serde_json::Value> = report
                .rejected
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "kind": r.kind,
                        "id": r.id,
                        "type": r.error.error_type(),
                        "message": r.error.to_string(),
                    })
                })
                .collect();

            let output = serde_json::json!({
                "capacity": network.capacity(),
                "vertices": network.vertex_count(),
                "edges": network.edges().count(),
                "houses": network.houses().count(),
                "vertices_added": report.vertices_added,
                "edges_added": report.edges_added,
                "houses_added": report.houses_added,
                "rejected": rejected,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "{} vertices, {} edges, {} houses (capacity {})",
                    network.vertex_count(),
                    network.edges().count(),
                    network.houses().count(),
                    network.capacity()
                );
            }
            for rejection in &report.rejected {
                println!(
                    "rejected {} {}: {}",
                    kind_label(rejection.kind),
                    rejection.id,
                    rejection.error
                );
            }
            if report.is_clean() && !cli.quiet {
                println!("ok");
            }
        }
    }

    if report.is_clean() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::Data)
    }
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Vertex => "vertex",
        EntryKind::Edge => "edge",
        EntryKind::House => "house",
    }
}
