use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Instant;

use crate::error::Result;
use crate::graph::algos::shared::{reconstruct_path, slots_to_ids, HeapEntry};
use crate::graph::heuristic::Heuristic;
use crate::graph::network::RoadNetwork;
use crate::graph::types::{Cost, Route, RouteOutcome, SearchStats};

/// Heuristic-guided search for a single route from `start` to `end`.
///
/// The frontier is ordered by `cost so far + heuristic(vertex, end)`. The
/// route is optimal whenever the heuristic never overestimates; see
/// `graph::heuristic` for when the grid estimate holds.
#[tracing::instrument(skip(network, heuristic), fields(capacity = network.capacity()))]
pub fn a_star(
    network: &RoadNetwork,
    start: &str,
    end: &str,
    heuristic: &dyn Heuristic,
) -> Result<RouteOutcome> {
    let started = Instant::now();
    let source = network.require_vertex(start)?.index;
    let target = network.require_vertex(end)?.index;

    let capacity = network.capacity();
    let mut best = vec![Cost::INFINITY; capacity];
    let mut predecessors: Vec<Option<usize>> = vec![None; capacity];
    let mut heap = BinaryHeap::new();
    let mut stats = SearchStats::default();

    best[source] = Cost::ZERO;
    heap.push(Reverse(HeapEntry::new(
        source,
        Cost::new(heuristic.estimate(source, target)),
        Cost::ZERO,
    )));
    stats.nodes_generated += 1;

    while let Some(Reverse(entry)) = heap.pop() {
        // Outdated entry, a cheaper one for this slot was already pushed
        if entry.cost > best[entry.slot] {
            stats.stale_skipped += 1;
            continue;
        }
        stats.nodes_expanded += 1;

        if entry.slot == target {
            let path = reconstruct_path(&predecessors, source, target);
            crate::trace_time!(started, "a_star", expanded = stats.nodes_expanded);
            return Ok(RouteOutcome::Found(Route {
                from: start.to_string(),
                to: end.to_string(),
                path: slots_to_ids(network, &path, start, end),
                cost: entry.cost,
                stats,
            }));
        }

        for (neighbor, weight) in network.matrix().neighbors(entry.slot) {
            let tentative = entry.cost + weight;
            if tentative < best[neighbor] {
                predecessors[neighbor] = Some(entry.slot);
                best[neighbor] = tentative;
                let priority = tentative + Cost::new(heuristic.estimate(neighbor, target));
                heap.push(Reverse(HeapEntry::new(neighbor, priority, tentative)));
                stats.nodes_generated += 1;
            }
        }
    }

    crate::trace_time!(started, "a_star", expanded = stats.nodes_expanded);
    tracing::debug!(start, end, "no path found");

    Ok(RouteOutcome::NoPathFound {
        from: start.to_string(),
        to: end.to_string(),
    })
}
