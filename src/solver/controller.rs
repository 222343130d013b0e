//! Run-time-bounded solve controller.
//!
//! Orchestrates one solve: validates the order, builds the restricted
//! matrix, seeds an upper bound with the nearest-neighbor heuristic plus
//! local refinement, then runs branch-and-bound under a wall-clock budget.
//! The budget is enforced by cooperative polling at every expansion step,
//! never by signals or forced termination, so an interrupted search always
//! hands back consistent state.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use super::branch_and_bound::branch_and_bound;
use crate::constructive::{insertion_order_path, nearest_neighbor_path};
use crate::distance::OrderMatrix;
use crate::error::{Error, Result};
use crate::local_search::{refine, DEFAULT_MAX_PASSES};
use crate::models::{AccessMode, NodeId, SolveResult, SolverConfig, WarehouseMap};

/// Wall-clock budget polled by the search at each expansion step.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use pickpath::solver::Deadline;
///
/// assert!(Deadline::after(Duration::ZERO).expired());
/// assert!(!Deadline::never().expired());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    expires_at: Option<Instant>,
}

impl Deadline {
    /// A deadline `budget` from now.
    ///
    /// Budgets too large to represent as an instant are treated as
    /// unbounded.
    pub fn after(budget: Duration) -> Self {
        Self {
            expires_at: Instant::now().checked_add(budget),
        }
    }

    /// A deadline that never expires.
    pub fn never() -> Self {
        Self { expires_at: None }
    }

    /// Whether the budget has elapsed.
    pub fn expired(&self) -> bool {
        self.expires_at.is_some_and(|t| Instant::now() >= t)
    }
}

/// Computes a minimum-cost visiting sequence for one order.
///
/// The returned path starts at `start`, visits every stop exactly once,
/// and, when `config.dynamic_end` is set and `end_candidates` is
/// non-empty, finishes at the cheapest reachable candidate. If the
/// wall-clock budget expires first, the best path known at that instant is
/// returned with `exact = false`; the refined nearest-neighbor seed
/// guarantees such a path exists.
///
/// `exact = true` only for [`AccessMode::Multi`] searches that exhausted
/// their frontier: single-access commits to one entry stop and can miss
/// the global optimum, so its results are never certified.
///
/// # Errors
///
/// - [`Error::EmptyOrder`] when `stops` is empty.
/// - [`Error::InvalidTopology`] when some stop cannot appear on any valid
///   path.
/// - [`Error::ConfigurationError`] when the deadline fires before any
///   complete path exists; the heuristic seed makes this unreachable
///   unless the controller is miswired.
///
/// # Examples
///
/// ```
/// use pickpath::distance::DistanceMatrix;
/// use pickpath::{solve_path, AccessMode, SolverConfig};
///
/// let mut map = DistanceMatrix::new(5);
/// for i in 0..5usize {
///     for j in 0..5usize {
///         if i != j {
///             map.set(i, j, (i as f64 - j as f64).abs());
///         }
///     }
/// }
///
/// let result = solve_path(&map, 2, &[1, 4, 3], &[0], &SolverConfig::default()).unwrap();
/// assert_eq!(result.path, vec![2, 4, 3, 1, 0]);
/// assert!((result.cost - 6.0).abs() < 1e-10);
/// assert!(result.exact);
/// ```
pub fn solve_path(
    map: &impl WarehouseMap,
    start: NodeId,
    stops: &[NodeId],
    end_candidates: &[NodeId],
    config: &SolverConfig,
) -> Result<SolveResult> {
    let ends: &[NodeId] = if config.dynamic_end { end_candidates } else { &[] };
    let order = OrderMatrix::build(map, start, stops, ends)?;

    // Heuristic seed. The greedy walk can dead-end under asymmetric
    // partial connectivity; the insertion-order path keeps a (possibly
    // infinite) seed available so the search always has a bound to beat.
    let mut seed_route = match nearest_neighbor_path(&order) {
        Some((route, _)) => route,
        None => {
            warn!("nearest-neighbor walk dead-ended; seeding from insertion order");
            insertion_order_path(&order).0
        }
    };
    let seed_cost = refine(&mut seed_route, &order, DEFAULT_MAX_PASSES);
    debug!(seed_cost, ?config.access_mode, "seeded branch-and-bound");

    let deadline = Deadline::after(config.max_run_time);
    let outcome = branch_and_bound(&order, &seed_route, seed_cost, config.access_mode, &deadline);

    if !outcome.cost.is_finite() {
        if outcome.completed {
            // The frontier was exhausted without ever completing a path:
            // the stops are pairwise routable but no ordering covers them
            // all.
            return Err(Error::InvalidTopology {
                node: order.node_id(1),
            });
        }
        return Err(Error::ConfigurationError {
            message: "deadline expired before any complete path existed; \
                      the heuristic seed precondition was violated"
                .into(),
        });
    }

    let exact = outcome.completed && config.access_mode == AccessMode::Multi;
    Ok(SolveResult {
        path: order.to_path(&outcome.route),
        cost: outcome.cost,
        exact,
    })
}
