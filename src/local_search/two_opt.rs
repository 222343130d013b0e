//! Open-path 2-opt improvement.
//!
//! # Algorithm
//!
//! For each segment `[i..=j]` of the visiting order, compute the change in
//! path cost from reversing it:
//!
//! ```text
//! delta = d(prev_i, r[j]) + d(r[i], next_j) + reversed inner legs
//!       - d(prev_i, r[i]) - d(r[j], next_j) - forward inner legs
//! ```
//!
//! where `prev_i` is the start for the first position and `next_j` is the
//! virtual terminal for the last. The inner legs are part of the delta
//! because costs may be asymmetric: reversing a segment flips the
//! direction of every edge inside it, not just the two boundary edges.
//!
//! Accepts any strictly improving reversal (first-improvement) and sweeps
//! until a full pass changes nothing.
//!
//! # Complexity
//!
//! O(k³) per pass in the worst case (k² segments, O(k) delta each).
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::EPSILON;
use crate::distance::OrderMatrix;

/// Runs one first-improvement 2-opt sweep over `route` in place.
///
/// `route` is the visiting order over stop indices of `order`. Returns
/// whether any reversal was accepted.
///
/// # Examples
///
/// ```
/// use pickpath::distance::{DistanceMatrix, OrderMatrix};
/// use pickpath::local_search::two_opt_pass;
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
/// // Suboptimal order 2, 1, 3 costs 2+1+2 = 5; optimal 1, 2, 3 costs 3.
/// let mut route = vec![2, 1, 3];
/// assert!(two_opt_pass(&mut route, &order));
/// assert!(order.order_cost(&route) <= 5.0);
/// ```
pub fn two_opt_pass(route: &mut [usize], order: &OrderMatrix) -> bool {
    let k = route.len();
    if k < 2 {
        return false;
    }

    let m = order.matrix();
    let terminal = order.terminal_index();
    let mut improved = false;

    for i in 0..k - 1 {
        for j in i + 1..k {
            let prev = if i == 0 { 0 } else { route[i - 1] };
            let next = if j == k - 1 { terminal } else { route[j + 1] };

            let mut old = m.get(prev, route[i]) + m.get(route[j], next);
            let mut new = m.get(prev, route[j]) + m.get(route[i], next);
            for t in i..j {
                old += m.get(route[t], route[t + 1]);
                new += m.get(route[t + 1], route[t]);
            }

            if new < old - EPSILON {
                route[i..=j].reverse();
                improved = true;
            }
        }
    }

    improved
}
