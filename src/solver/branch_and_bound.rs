//! Branch-and-bound search over partial pick paths.
//!
//! The frontier is an explicit depth-first stack: memory stays proportional
//! to depth times branching factor, every pop is an interrupt point for the
//! deadline, and there is no recursive call chain to unwind on
//! interruption. Each frontier entry exclusively owns its working matrix
//! (copy-on-branch), so pruning or interruption never leaves shared state
//! half-updated.
//!
//! A child's lower bound is its cumulative edge cost plus the reduction
//! bound of its remaining sub-problem; any child whose bound reaches the
//! best known complete-path cost is discarded, which is safe because the
//! reduction bound never overestimates (see [`crate::reduction`]).

use tracing::{debug, trace};

use super::Deadline;
use crate::distance::{DistanceMatrix, OrderMatrix};
use crate::models::AccessMode;
use crate::reduction::{reduce, strike};

/// A partial visiting order on the search frontier.
///
/// `matrix` is the unreduced remaining sub-problem: rows of visited stops
/// and columns of entered stops are struck to infinity, original costs
/// everywhere else. Keeping it unreduced lets every child compute a full
/// reduction bound for its own remainder instead of an incremental one.
#[derive(Debug, Clone)]
struct PartialPath {
    route: Vec<usize>,
    cost: f64,
    bound: f64,
    matrix: DistanceMatrix,
}

/// Outcome of one bounded search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Best known visiting order (stop indices) at termination.
    pub route: Vec<usize>,
    /// Its total cost, terminal leg included.
    pub cost: f64,
    /// False when the deadline interrupted the search before the frontier
    /// was exhausted.
    pub completed: bool,
}

/// Runs branch-and-bound seeded with a complete path.
///
/// `seed_route` and `seed_cost` are the initial best-known complete path
/// (normally the refined nearest-neighbor result); the search only ever
/// replaces them with strictly cheaper complete paths, so the returned
/// route is never worse than the seed.
///
/// In [`AccessMode::Single`] the frontier is rooted only at the designated
/// entry: the cheapest first stop from the start, lowest index on ties.
/// In [`AccessMode::Multi`] every reachable first stop roots its own
/// branch; only this mode can certify a global optimum.
///
/// The deadline is polled at every expansion step, so an expired budget
/// returns the best known path at that instant with `completed = false`.
pub fn branch_and_bound(
    order: &OrderMatrix,
    seed_route: &[usize],
    seed_cost: f64,
    mode: AccessMode,
    deadline: &Deadline,
) -> SearchOutcome {
    let k = order.num_stops();
    let terminal = order.terminal_index();

    let mut best_route = seed_route.to_vec();
    let mut best_cost = seed_cost;

    let root = PartialPath {
        route: Vec::new(),
        cost: 0.0,
        bound: 0.0,
        matrix: order.matrix().clone(),
    };

    let mut stack: Vec<PartialPath> = Vec::new();
    let mut pruned: u64 = 0;

    // Entries are pushed in reverse index order throughout so the lowest
    // index is explored first, keeping the search deterministic.
    match mode {
        AccessMode::Single => {
            let entries: Vec<usize> = (1..=k).collect();
            if let Some(entry) = order.matrix().nearest(0, &entries) {
                if let Some(child) = expand(order, &root, entry, best_cost) {
                    stack.push(child);
                }
            }
        }
        AccessMode::Multi => {
            for entry in (1..=k).rev() {
                match expand(order, &root, entry, best_cost) {
                    Some(child) => stack.push(child),
                    None => pruned += 1,
                }
            }
        }
    }

    let mut expansions: u64 = 0;

    while let Some(node) = stack.pop() {
        if deadline.expired() {
            debug!(expansions, pruned, best_cost, "deadline expired during search");
            return SearchOutcome {
                route: best_route,
                cost: best_cost,
                completed: false,
            };
        }
        expansions += 1;

        // The best may have improved since this entry was pushed.
        if node.bound >= best_cost {
            pruned += 1;
            continue;
        }

        if node.route.len() == k {
            let last = node.route[k - 1];
            let total = node.cost + order.matrix().get(last, terminal);
            if total < best_cost {
                trace!(total, "new best path");
                best_route = node.route;
                best_cost = total;
            }
            continue;
        }

        for next in (1..=k).rev() {
            if node.route.contains(&next) {
                continue;
            }
            match expand(order, &node, next, best_cost) {
                Some(child) => stack.push(child),
                None => pruned += 1,
            }
        }
    }

    debug!(expansions, pruned, best_cost, "search frontier exhausted");
    SearchOutcome {
        route: best_route,
        cost: best_cost,
        completed: true,
    }
}

/// Creates the child of `parent` that visits `next`, or `None` when the
/// edge is unreachable or the child's bound cannot beat `best_cost`.
fn expand(
    order: &OrderMatrix,
    parent: &PartialPath,
    next: usize,
    best_cost: f64,
) -> Option<PartialPath> {
    let from = parent.route.last().copied().unwrap_or(0);
    let edge = order.matrix().get(from, next);
    if !edge.is_finite() {
        return None;
    }

    let mut matrix = parent.matrix.clone();
    strike(&mut matrix, from, next);

    let mut scratch = matrix.clone();
    let reduction = reduce(&mut scratch);

    let cost = parent.cost + edge;
    let bound = cost + reduction;
    if bound >= best_cost {
        return None;
    }

    let mut route = Vec::with_capacity(parent.route.len() + 1);
    route.extend_from_slice(&parent.route);
    route.push(next);

    Some(PartialPath {
        route,
        cost,
        bound,
        matrix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_neighbor_path;
    use crate::distance::DistanceMatrix;
    use crate::local_search::{refine, DEFAULT_MAX_PASSES};
    use crate::solver::brute_force;

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

    /// Unit-square corners: 0 at (0,0), 1 at (1,0), 2 at (0,1), 3 at (1,1),
    /// Manhattan distances.
    fn square_map() -> DistanceMatrix {
        let coords = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
        let mut dm = DistanceMatrix::new(4);
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    let (xi, yi): (f64, f64) = coords[i];
                    let (xj, yj) = coords[j];
                    dm.set(i, j, (xi - xj).abs() + (yi - yj).abs());
                }
            }
        }
        dm
    }

    fn solve(order: &OrderMatrix, mode: AccessMode) -> SearchOutcome {
        let (mut seed, _) = nearest_neighbor_path(order).expect("seed");
        let seed_cost = refine(&mut seed, order, DEFAULT_MAX_PASSES);
        branch_and_bound(order, &seed, seed_cost, mode, &Deadline::never())
    }

    #[test]
    fn test_bnb_square_grid_optimum() {
        let map = square_map();
        let order = OrderMatrix::build(&map, 0, &[1, 2, 3], &[]).expect("valid order");
        let outcome = solve(&order, AccessMode::Multi);
        assert!(outcome.completed);
        // Hamiltonian path over the unit square from a corner costs 3.
        assert!((outcome.cost - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_bnb_square_grid_deterministic() {
        let map = square_map();
        let order = OrderMatrix::build(&map, 0, &[1, 2, 3], &[]).expect("valid order");
        let a = solve(&order, AccessMode::Multi);
        let b = solve(&order, AccessMode::Multi);
        assert_eq!(a, b);
    }

    #[test]
    fn test_bnb_matches_brute_force() {
        let map = square_map();
        let order = OrderMatrix::build(&map, 0, &[1, 2, 3], &[]).expect("valid order");
        let outcome = solve(&order, AccessMode::Multi);
        let (_, oracle) = brute_force(&order).expect("feasible");
        assert!((outcome.cost - oracle).abs() < 1e-10);
    }

    #[test]
    fn test_bnb_multi_never_worse_than_single() {
        // Greedy entry (the cheap first hop) is a trap on this map.
        let mut map = DistanceMatrix::new(4);
        map.set(0, 1, 1.0);
        map.set(0, 2, 2.0);
        map.set(0, 3, 10.0);
        map.set(1, 2, 10.0);
        map.set(1, 3, 10.0);
        map.set(2, 1, 2.0);
        map.set(2, 3, 10.0);
        map.set(3, 1, 1.0);
        map.set(3, 2, 1.0);
        for i in 1..4 {
            map.set(i, 0, 100.0);
        }
        let order = OrderMatrix::build(&map, 0, &[1, 2, 3], &[]).expect("valid order");

        let single = solve(&order, AccessMode::Single);
        let multi = solve(&order, AccessMode::Multi);
        assert!(multi.cost <= single.cost + 1e-10);
    }

    #[test]
    fn test_bnb_never_worse_than_seed() {
        let map = line_map(6);
        let order =
            OrderMatrix::build(&map, 0, &[5, 2, 4, 1, 3], &[]).expect("valid order");
        let (seed, seed_cost) = nearest_neighbor_path(&order).expect("seed");
        let outcome = branch_and_bound(
            &order,
            &seed,
            seed_cost,
            AccessMode::Multi,
            &Deadline::never(),
        );
        assert!(outcome.cost <= seed_cost + 1e-10);
    }

    #[test]
    fn test_bnb_expired_deadline_returns_seed() {
        let map = line_map(6);
        let order =
            OrderMatrix::build(&map, 0, &[5, 2, 4, 1, 3], &[]).expect("valid order");
        let (seed, seed_cost) = nearest_neighbor_path(&order).expect("seed");
        let outcome = branch_and_bound(
            &order,
            &seed,
            seed_cost,
            AccessMode::Multi,
            &Deadline::after(std::time::Duration::ZERO),
        );
        assert!(!outcome.completed);
        assert_eq!(outcome.route, seed);
        assert!((outcome.cost - seed_cost).abs() < 1e-10);
    }

    #[test]
    fn test_bnb_picks_cheapest_dynamic_end() {
        let map = line_map(7);
        // Exit at 6: sweeping up the line and out beats backtracking.
        let order = OrderMatrix::build(&map, 0, &[2, 4], &[6]).expect("valid order");
        let outcome = solve(&order, AccessMode::Multi);
        assert!(outcome.completed);
        assert_eq!(order.to_path(&outcome.route), vec![0, 2, 4, 6]);
        // 0→2 + 2→4 + 4→6
        assert!((outcome.cost - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_bnb_asymmetric_costs() {
        let mut map = DistanceMatrix::new(4);
        // Going "up" is cheap, coming "down" is expensive.
        for i in 0..4usize {
            for j in 0..4usize {
                if i != j {
                    let d = (i as f64 - j as f64).abs();
                    map.set(i, j, if i < j { d } else { d * 3.0 });
                }
            }
        }
        let order = OrderMatrix::build(&map, 0, &[1, 2, 3], &[]).expect("valid order");
        let outcome = solve(&order, AccessMode::Multi);
        let (_, oracle) = brute_force(&order).expect("feasible");
        assert!(outcome.completed);
        assert!((outcome.cost - oracle).abs() < 1e-10);
    }
}
