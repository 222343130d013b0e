//! Per-order restricted matrix.

use super::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{NodeId, WarehouseMap};

/// The cost matrix restricted to one order's nodes, in the internal index
/// space the solvers work in: `0` is the start, `1..=k` are the required
/// stops, and `k + 1` is a virtual terminal that closes the open path.
///
/// The terminal column costs `0.0` from every stop when the path may end
/// anywhere, otherwise the cheapest cost to any end candidate, with the
/// achieving candidate recorded per stop. Folding the exit choice into a
/// single column keeps the row/column reduction a valid lower bound: every
/// remaining row is exited exactly once and every remaining column entered
/// exactly once, whichever exit the finished path picks.
///
/// The start column and the terminal row stay infinite (a path never
/// re-enters the start and never leaves the terminal), as does the
/// `start → terminal` edge while stops remain unvisited.
#[derive(Debug, Clone)]
pub struct OrderMatrix {
    matrix: DistanceMatrix,
    start: NodeId,
    stops: Vec<NodeId>,
    end_choice: Vec<Option<NodeId>>,
}

impl OrderMatrix {
    /// Builds the restricted matrix for one order.
    ///
    /// Duplicate stop ids are collapsed to their first occurrence. An empty
    /// `end_candidates` slice means the path may end at whichever stop is
    /// visited last.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyOrder`] when `stops` is empty, and
    /// [`Error::InvalidTopology`] when the start has no outgoing route or
    /// some stop can never be entered or never be left, since no valid
    /// path could include it.
    ///
    /// # Examples
    ///
    /// ```
    /// use pickpath::distance::{DistanceMatrix, OrderMatrix};
    ///
    /// let mut map = DistanceMatrix::new(4);
    /// for i in 0..4usize {
    ///     for j in 0..4usize {
    ///         if i != j {
    ///             map.set(i, j, (i as f64 - j as f64).abs());
    ///         }
    ///     }
    /// }
    ///
    /// let order = OrderMatrix::build(&map, 0, &[2, 3], &[]).unwrap();
    /// assert_eq!(order.num_stops(), 2);
    /// assert_eq!(order.matrix().get(0, 1), 2.0); // start → stop 2
    /// assert_eq!(order.matrix().get(1, 3), 0.0); // stop 2 → free terminal
    /// ```
    pub fn build(
        map: &impl WarehouseMap,
        start: NodeId,
        stops: &[NodeId],
        end_candidates: &[NodeId],
    ) -> Result<Self> {
        if stops.is_empty() {
            return Err(Error::EmptyOrder);
        }

        let mut unique: Vec<NodeId> = Vec::with_capacity(stops.len());
        for &s in stops {
            if !unique.contains(&s) {
                unique.push(s);
            }
        }

        let k = unique.len();
        let terminal = k + 1;
        let mut matrix = DistanceMatrix::new(k + 2);

        for (j, &sj) in unique.iter().enumerate() {
            matrix.set(0, j + 1, map.cost(start, sj));
        }
        for (i, &si) in unique.iter().enumerate() {
            for (j, &sj) in unique.iter().enumerate() {
                if i != j {
                    matrix.set(i + 1, j + 1, map.cost(si, sj));
                }
            }
        }

        let mut end_choice = vec![None; k];
        for (i, &si) in unique.iter().enumerate() {
            if end_candidates.is_empty() {
                matrix.set(i + 1, terminal, 0.0);
                continue;
            }
            let mut best: Option<(f64, NodeId)> = None;
            for &e in end_candidates {
                let d = map.cost(si, e);
                if !d.is_finite() {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((bd, be)) => d < bd || (d == bd && e < be),
                };
                if better {
                    best = Some((d, e));
                }
            }
            if let Some((d, e)) = best {
                matrix.set(i + 1, terminal, d);
                end_choice[i] = Some(e);
            }
        }

        if !(1..=k).any(|j| matrix.get(0, j).is_finite()) {
            return Err(Error::InvalidTopology { node: start });
        }
        for i in 1..=k {
            let enterable = (0..=k).any(|r| r != i && matrix.get(r, i).is_finite());
            let leavable = (1..=terminal).any(|c| c != i && matrix.get(i, c).is_finite());
            if !enterable || !leavable {
                return Err(Error::InvalidTopology {
                    node: unique[i - 1],
                });
            }
        }

        Ok(Self {
            matrix,
            start,
            stops: unique,
            end_choice,
        })
    }

    /// The restricted matrix, terminal column included.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Number of required stops after deduplication.
    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    /// Internal index of the start node.
    pub fn start_index(&self) -> usize {
        0
    }

    /// Internal index of the virtual terminal.
    pub fn terminal_index(&self) -> usize {
        self.matrix.size() - 1
    }

    /// Maps an internal index (`0` or a stop index) back to its [`NodeId`].
    ///
    /// # Panics
    ///
    /// Panics when given the terminal index; the terminal has no external
    /// identity of its own.
    pub fn node_id(&self, index: usize) -> NodeId {
        if index == 0 {
            self.start
        } else {
            self.stops[index - 1]
        }
    }

    /// The exit node a path ending at stop `index` would walk to, when end
    /// candidates were supplied and at least one is reachable.
    pub fn end_for(&self, index: usize) -> Option<NodeId> {
        self.end_choice[index - 1]
    }

    /// Total cost of a visiting order over stop indices, closed through the
    /// terminal column. Infinite when any leg is unreachable.
    pub fn order_cost(&self, order: &[usize]) -> f64 {
        let mut cost = 0.0;
        let mut prev = 0;
        for &i in order {
            cost += self.matrix.get(prev, i);
            prev = i;
        }
        cost + self.matrix.get(prev, self.terminal_index())
    }

    /// Converts an internal visiting order into the public node-id path:
    /// start, stops in order, then the chosen exit node if any.
    pub fn to_path(&self, order: &[usize]) -> Vec<NodeId> {
        let mut path = Vec::with_capacity(order.len() + 2);
        path.push(self.start);
        for &i in order {
            path.push(self.node_id(i));
        }
        if let Some(&last) = order.last() {
            if let Some(end) = self.end_for(last) {
                path.push(end);
            }
        }
        path
    }
}
