//! Dense cost matrix.

use crate::models::{NodeId, WarehouseMap};

/// A dense n×n travel-cost matrix stored in row-major order.
///
/// `f64::INFINITY` marks an unreachable pair, and the diagonal is always
/// infinite: a position is never re-entered from itself mid-search. Costs
/// may be asymmetric (one-way aisles).
///
/// # Examples
///
/// ```
/// use pickpath::distance::DistanceMatrix;
///
/// let mut dm = DistanceMatrix::new(3);
/// dm.set(0, 1, 4.0);
/// dm.set(1, 0, 4.0);
/// assert_eq!(dm.get(0, 1), 4.0);
/// assert!(dm.get(0, 2).is_infinite());
/// assert!(dm.get(1, 1).is_infinite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size with every pair unreachable.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![f64::INFINITY; size * size],
            size,
        }
    }

    /// Creates a matrix from an explicit row-major grid.
    ///
    /// The diagonal is forced to `f64::INFINITY` regardless of the supplied
    /// values. Returns `None` if the data length doesn't match
    /// `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        let mut dm = Self { data, size };
        for i in 0..size {
            dm.set(i, i, f64::INFINITY);
        }
        Some(dm)
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        self.data[from * self.size + to] = cost;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cheapest candidate reachable from `from`.
    ///
    /// Ties are broken by the lowest candidate index, so the choice is
    /// deterministic regardless of candidate ordering. Returns `None` when
    /// no candidate is reachable.
    pub fn nearest(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(f64, usize)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            if !d.is_finite() {
                continue;
            }
            let better = match best {
                None => true,
                Some((bd, bc)) => d < bd || (d == bd && c < bc),
            };
            if better {
                best = Some((d, c));
            }
        }
        best.map(|(_, c)| c)
    }

    /// Total cost of walking `path` front to back.
    ///
    /// An open path: no return leg is added. Infinite if any consecutive
    /// pair is unreachable; `0.0` for paths shorter than two nodes.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

impl WarehouseMap for DistanceMatrix {
    fn cost(&self, from: NodeId, to: NodeId) -> f64 {
        self.get(from, to)
    }
}
