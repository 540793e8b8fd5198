//! Dense symmetric distance matrix for agglomerative clustering.

use super::{ClusterError, Linkage};
use crate::graph::WeightedGraph;

/// One matrix entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// Diagonal: a slot has no distance to itself.
    NotApplicable,
    /// No link between the two clusters, or one of them has been retired.
    Unreachable,
    Distance(f64),
}

impl Cell {
    /// The distance if it is a usable merge candidate.
    #[must_use]
    pub fn candidate(self) -> Option<f64> {
        match self {
            Self::Distance(d) if d > 0.0 && d.is_finite() => Some(d),
            _ => None,
        }
    }

    /// Lance-Williams update: the cell between `k` and the union of two
    /// clusters, given `self = d(k, i)` and `other = d(k, j)`.
    #[must_use]
    pub const fn combine(self, other: Self, linkage: Linkage) -> Self {
        match (self, other) {
            (Self::Distance(x), Self::Distance(y)) => Self::Distance(linkage.pick(x, y)),
            (Self::Distance(d), _) | (_, Self::Distance(d)) => Self::Distance(d),
            _ => Self::Unreachable,
        }
    }
}

/// `n × n` matrix, stored row-major. Kept symmetric by every mutation.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    cells: Vec<Cell>,
}

impl DistanceMatrix {
    /// Distance between `i` and `j` is `1 / w` where `w` is the heaviest
    /// edge between them in either direction. Heavier edges mean closer
    /// vertices. A heaviest weight of 0 leaves the pair unreachable.
    ///
    /// # Errors
    ///
    /// [`ClusterError::Capacity`] if `n²` cells cannot be allocated.
    pub fn from_graph(graph: &WeightedGraph) -> Result<Self, ClusterError> {
        let n = graph.vertex_count();
        let capacity = ClusterError::Capacity { vertex_count: n };
        let len = n.checked_mul(n).ok_or_else(|| capacity.clone())?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| capacity)?;
        cells.resize(len, Cell::Unreachable);

        let mut matrix = Self { n, cells };
        for i in 0..n {
            matrix.set(i, i, Cell::NotApplicable);
        }

        // First pass keeps the heaviest weight per pair, second inverts it.
        for (from, to, weight) in graph.edges() {
            if from == to {
                continue;
            }
            let heaviest = match matrix.get(from, to) {
                Cell::Distance(existing) if existing >= weight => existing,
                _ => weight,
            };
            matrix.set_pair(from, to, Cell::Distance(heaviest));
        }
        for cell in &mut matrix.cells {
            if let Cell::Distance(weight) = *cell {
                *cell = if weight > 0.0 {
                    Cell::Distance(1.0 / weight)
                } else {
                    Cell::Unreachable
                };
            }
        }

        Ok(matrix)
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Cell {
        self.cells[i * self.n + j]
    }

    fn set(&mut self, i: usize, j: usize, cell: Cell) {
        self.cells[i * self.n + j] = cell;
    }

    fn set_pair(&mut self, i: usize, j: usize, cell: Cell) {
        self.set(i, j, cell);
        self.set(j, i, cell);
    }

    /// Smallest positive finite distance as `(i, j, distance)` with
    /// `i < j`. The first pair in row-major order wins ties.
    #[must_use]
    pub fn closest_pair(&self) -> Option<(usize, usize, f64)> {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                let Some(d) = self.get(i, j).candidate() else {
                    continue;
                };
                if best.is_none_or(|(_, _, current)| d < current) {
                    best = Some((i, j, d));
                }
            }
        }
        best
    }

    /// Fold slot `absorbed` into `keep`: every other slot's distance to
    /// `keep` becomes the linkage of its distances to the two, then
    /// `absorbed` is retired.
    pub fn merge(&mut self, keep: usize, absorbed: usize, linkage: Linkage) {
        for k in 0..self.n {
            if k == keep || k == absorbed {
                continue;
            }
            let combined = self.get(keep, k).combine(self.get(absorbed, k), linkage);
            self.set_pair(keep, k, combined);
        }
        self.retire(absorbed);
    }

    /// Mark every distance to `slot` unreachable so it is never chosen
    /// again.
    pub fn retire(&mut self, slot: usize) {
        for k in 0..self.n {
            if k != slot {
                self.set_pair(slot, k, Cell::Unreachable);
            }
        }
    }
}
