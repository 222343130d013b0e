//! Exhaustive permutation search.
//!
//! Tries every visiting order, so it is exact for any admissible instance
//! but factorial in the number of stops. Intended for small orders and as
//! the oracle the bounded solver is checked against in tests.

use crate::distance::OrderMatrix;

/// Finds an optimal visiting order by enumerating every permutation.
///
/// Deterministic: on cost ties the first permutation enumerated wins.
/// Returns `None` when no permutation has finite cost.
///
/// # Examples
///
/// ```
/// use pickpath::distance::{DistanceMatrix, OrderMatrix};
/// use pickpath::solver::brute_force;
///
/// let mut map = DistanceMatrix::new(4);
/// for i in 0..4usize {
///     for j in 0..4usize {
///         if i != j {
///             map.set(i, j, (i as f64 - j as f64).abs());
///         }
///     }
/// }
/// let order = OrderMatrix::build(&map, 0, &[3, 1, 2], &[]).unwrap();
///
/// let (route, cost) = brute_force(&order).unwrap();
/// assert_eq!(order.to_path(&route), vec![0, 1, 2, 3]);
/// assert!((cost - 3.0).abs() < 1e-10);
/// ```
pub fn brute_force(order: &OrderMatrix) -> Option<(Vec<usize>, f64)> {
    let k = order.num_stops();
    let mut route: Vec<usize> = (1..=k).collect();
    let mut best: Option<(Vec<usize>, f64)> = None;
    permute(&mut route, 0, order, &mut best);
    best
}

fn permute(
    route: &mut Vec<usize>,
    depth: usize,
    order: &OrderMatrix,
    best: &mut Option<(Vec<usize>, f64)>,
) {
    if depth == route.len() {
        let cost = order.order_cost(route);
        if !cost.is_finite() {
            return;
        }
        let improves = match best {
            None => true,
            Some((_, b)) => cost < *b,
        };
        if improves {
            *best = Some((route.clone(), cost));
        }
        return;
    }

    for i in depth..route.len() {
        route.swap(depth, i);
        permute(route, depth + 1, order, best);
        route.swap(depth, i);
    }
}
