use crate::graph::types::Cost;

/// Dense square table of pairwise edge costs, stored row-major.
/// `None` means "no edge", including on the diagonal.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<Option<Cost>>,
}

impl AdjacencyMatrix {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cost> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    /// Set the cost between two slots in both directions.
    /// Overwrites any existing cost (last write wins).
    pub fn set_symmetric(&mut self, a: usize, b: usize, cost: Cost) {
        debug_assert!(a < self.size && b < self.size);
        self.cells[a * self.size + b] = Some(cost);
        self.cells[b * self.size + a] = Some(cost);
    }

    /// Iterate the slots adjacent to `row` with their edge cost
    pub fn neighbors(&self, row: usize) -> impl Iterator<Item = (usize, Cost)> + '_ {
        let start = row.min(self.size) * self.size;
        let end = if row < self.size { start + self.size } else { start };
        self.cells[start..end]
            .iter()
            .enumerate()
            .filter_map(|(col, cell)| cell.map(|cost| (col, cost)))
    }

    #[cfg(test)]
    pub(crate) fn is_symmetric(&self) -> bool {
        (0..self.size).all(|a| (a..self.size).all(|b| self.get(a, b) == self.get(b, a)))
    }

    /// Number of undirected connections (self-loops count once)
    #[cfg(test)]
    pub(crate) fn edge_count(&self) -> usize {
        (0..self.size)
            .map(|a| (a..self.size).filter(|&b| self.get(a, b).is_some()).count())
            .sum()
    }
}
