//! Localized path refinement.
//!
//! Alternates segment-reversal and adjacent-swap sweeps over a complete
//! path, accepting only strictly improving moves, until a full round
//! changes nothing (a local optimum) or the pass cap is reached. This is a
//! polynomial-time tightening of the heuristic seed, not an optimality
//! guarantee; the move set and the cap are parameters rather than a fixed
//! behavioral contract.

use super::{swap_pass, two_opt_pass};
use crate::distance::OrderMatrix;

/// Pass cap used by the solver controller.
pub const DEFAULT_MAX_PASSES: usize = 32;

/// Refines `route` in place and returns its final cost.
///
/// # Examples
///
/// ```
/// use pickpath::distance::{DistanceMatrix, OrderMatrix};
/// use pickpath::local_search::{refine, DEFAULT_MAX_PASSES};
///
/// let mut map = DistanceMatrix::new(5);
/// for i in 0..5usize {
///     for j in 0..5usize {
///         if i != j {
///             map.set(i, j, (i as f64 - j as f64).abs());
///         }
///     }
/// }
/// let order = OrderMatrix::build(&map, 0, &[1, 2, 3, 4], &[]).unwrap();
///
/// let mut route = vec![3, 1, 4, 2];
/// let cost = refine(&mut route, &order, DEFAULT_MAX_PASSES);
/// assert!((cost - 4.0).abs() < 1e-10);
/// assert_eq!(route, vec![1, 2, 3, 4]);
/// ```
pub fn refine(route: &mut [usize], order: &OrderMatrix, max_passes: usize) -> f64 {
    for _ in 0..max_passes {
        let reversed = two_opt_pass(route, order);
        let swapped = swap_pass(route, order);
        if !reversed && !swapped {
            break;
        }
    }
    order.order_cost(route)
}
