//! Nearest-neighbor constructive heuristic.
//!
//! Builds a pick path greedily: starting from the entry point, always walk
//! to the cheapest unvisited stop, then close through the terminal column.
//!
//! # Complexity
//!
//! O(k²) where k = number of stops.
//!
//! # Role
//!
//! The result seeds the branch-and-bound upper bound. A tighter seed prunes
//! more of the search tree, which is why the heuristic runs before exact
//! search rather than only as a timeout fallback.

use crate::distance::OrderMatrix;

/// Builds a greedy visiting order over the stop indices of `order`.
///
/// Ties are broken by the lowest stop index for determinism. Returns the
/// visiting order and its total cost, or `None` when the greedy walk
/// dead-ends before covering every stop, which can happen with asymmetric
/// partial connectivity.
///
/// # Examples
///
/// ```
/// use pickpath::constructive::nearest_neighbor_path;
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
/// let order = OrderMatrix::build(&map, 0, &[1, 2, 3], &[]).unwrap();
///
/// let (route, cost) = nearest_neighbor_path(&order).unwrap();
/// assert_eq!(route, vec![1, 2, 3]);
/// assert!((cost - 3.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor_path(order: &OrderMatrix) -> Option<(Vec<usize>, f64)> {
    let k = order.num_stops();
    let matrix = order.matrix();

    let mut remaining: Vec<usize> = (1..=k).collect();
    let mut route = Vec::with_capacity(k);
    let mut current = order.start_index();

    while !remaining.is_empty() {
        let next = matrix.nearest(current, &remaining)?;
        remaining.retain(|&s| s != next);
        route.push(next);
        current = next;
    }

    let cost = order.order_cost(&route);
    if cost.is_finite() {
        Some((route, cost))
    } else {
        None
    }
}

/// Fallback seed: visit the stops in the order the caller listed them.
///
/// The cost may be infinite when consecutive stops are not connected; the
/// controller only falls back to this when the greedy walk fails, so that
/// a seed path always exists.
pub fn insertion_order_path(order: &OrderMatrix) -> (Vec<usize>, f64) {
    let route: Vec<usize> = (1..=order.num_stops()).collect();
    let cost = order.order_cost(&route);
    (route, cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;

    fn line_map(n: usize) -> DistanceMatrix {
        let mut dm = DistanceMatrix::new(n);
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    dm.set(i, j, (i as f64 - j as f64).abs());
                }
            }
        }
        dm
    }

    #[test]
    fn test_nn_walks_the_line() {
        let map = line_map(4);
        let order = OrderMatrix::build(&map, 0, &[1, 2, 3], &[]).expect("valid order");
        let (route, cost) = nearest_neighbor_path(&order).expect("complete walk");
        assert_eq!(route, vec![1, 2, 3]);
        assert!((cost - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_chooses_nearest_first() {
        let map = line_map(11);
        // stop 10 is far, stop 1 is near: greedy grabs 1 first
        let order = OrderMatrix::build(&map, 0, &[10, 1], &[]).expect("valid order");
        let (route, cost) = nearest_neighbor_path(&order).expect("complete walk");
        assert_eq!(order.to_path(&route), vec![0, 1, 10]);
        assert!((cost - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_nn_tie_breaks_by_lowest_index() {
        let mut map = DistanceMatrix::new(3);
        map.set(0, 1, 2.0);
        map.set(0, 2, 2.0);
        map.set(1, 2, 1.0);
        map.set(2, 1, 1.0);
        let order = OrderMatrix::build(&map, 0, &[1, 2], &[]).expect("valid order");
        let (route, _) = nearest_neighbor_path(&order).expect("complete walk");
        assert_eq!(order.to_path(&route), vec![0, 1, 2]);
    }

    #[test]
    fn test_nn_dead_end_returns_none() {
        // 0 → 2 is cheap, but 2 has no way onward to 1; greedy gets stuck.
        let mut map = DistanceMatrix::new(3);
        map.set(0, 1, 5.0);
        map.set(0, 2, 1.0);
        map.set(1, 2, 1.0);
        let order = OrderMatrix::build(&map, 0, &[1, 2], &[]).expect("valid order");
        assert!(nearest_neighbor_path(&order).is_none());
    }

    #[test]
    fn test_nn_includes_dynamic_end_leg() {
        let map = line_map(5);
        let order = OrderMatrix::build(&map, 0, &[1, 2], &[4]).expect("valid order");
        let (route, cost) = nearest_neighbor_path(&order).expect("complete walk");
        assert_eq!(order.to_path(&route), vec![0, 1, 2, 4]);
        // 0→1 + 1→2 + 2→4
        assert!((cost - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_insertion_order_path() {
        let map = line_map(4);
        let order = OrderMatrix::build(&map, 0, &[3, 1, 2], &[]).expect("valid order");
        let (route, cost) = insertion_order_path(&order);
        assert_eq!(route, vec![1, 2, 3]);
        // 0→3 + 3→1 + 1→2
        assert!((cost - 6.0).abs() < 1e-10);
    }
}
