use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::shared::HeapEntry;
use crate::graph::network::RoadNetwork;
use crate::graph::types::{Cost, Distances, SearchStats};

/// Uniform-cost search from `start` to every registered vertex.
///
/// Vertices with no connecting path keep `Cost::INFINITY`. Queue entries
/// whose cost is worse than the best known cost for their vertex are
/// skipped when popped, so each vertex is expanded once per improvement.
#[tracing::instrument(skip(network), fields(capacity = network.capacity(), vertices = network.vertex_count()))]
pub fn dijkstra(network: &RoadNetwork, start: &str) -> Result<Distances> {
    let started = Instant::now();
    let source = network.require_vertex(start)?.index;

    let mut best = vec![Cost::INFINITY; network.capacity()];
    let mut heap = BinaryHeap::new();
    let mut stats = SearchStats::default();

    best[source] = Cost::ZERO;
    heap.push(Reverse(HeapEntry::new(source, Cost::ZERO, Cost::ZERO)));
    stats.nodes_generated += 1;

    while let Some(Reverse(entry)) = heap.pop() {
        if entry.cost > best[entry.slot] {
            stats.stale_skipped += 1;
            continue;
        }
        stats.nodes_expanded += 1;

        for (neighbor, weight) in network.matrix().neighbors(entry.slot) {
            let candidate = entry.cost + weight;
            if candidate < best[neighbor] {
                best[neighbor] = candidate;
                heap.push(Reverse(HeapEntry::new(neighbor, candidate, candidate)));
                stats.nodes_generated += 1;
            }
        }
    }

    // Ids sharing a slot share its cost
    let best = &best;
    let costs = (0..network.capacity())
        .flat_map(|slot| {
            network
                .vertices_at(slot)
                .iter()
                .map(move |id| (id.clone(), best[slot]))
        })
        .collect();

    crate::trace_time!(
        started,
        "dijkstra",
        expanded = stats.nodes_expanded,
        generated = stats.nodes_generated
    );

    Ok(Distances {
        source: start.to_string(),
        costs,
        stats,
    })
}

#[cfg(test)]
mod tests;
