use crate::graph::network::RoadNetwork;
use crate::graph::types::Cost;

/// Priority queue entry. Wrap in `std::cmp::Reverse` to pop the lowest
/// priority first. Equal priorities are ordered by slot so runs are
/// deterministic.
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub slot: usize,
    /// Queue order: accumulated cost, plus the heuristic estimate for A*
    pub priority: Cost,
    /// Accumulated cost from the source when this entry was pushed
    pub cost: Cost,
}

impl HeapEntry {
    pub fn new(slot: usize, priority: Cost, cost: Cost) -> Self {
        Self {
            slot,
            priority,
            cost,
        }
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Weights are validated finite on insertion, so total_cmp never sees NaN
        self.priority
            .total_cmp(&other.priority)
            .then_with(|| self.slot.cmp(&other.slot))
    }
}

/// Walk the predecessor chain from `target` back to `source`.
/// Returns slots from source to target, both inclusive.
pub fn reconstruct_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        match predecessors.get(current).copied().flatten() {
            Some(previous) => {
                path.push(previous);
                current = previous;
            }
            None => break,
        }
    }

    path.reverse();
    path
}

/// Translate a slot path back into vertex ids. The endpoints keep the ids
/// the search was asked about; a shared interior slot reports its first id.
/// Two ids on the same slot give `[start, end]` for a one-slot path.
pub fn slots_to_ids(network: &RoadNetwork, slots: &[usize], start: &str, end: &str) -> Vec<String> {
    let mut ids = vec![start.to_string()];

    let interior = slots.get(1..slots.len().saturating_sub(1)).unwrap_or(&[]);
    ids.extend(
        interior
            .iter()
            .filter_map(|&slot| network.vertex_at(slot).map(str::to_string)),
    );

    if slots.len() > 1 || start != end {
        ids.push(end.to_string());
    }
    ids
}
