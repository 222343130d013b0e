//! # pickpath
//!
//! Warehouse pick-path optimization library. Given an order (a set of item
//! locations), a fixed entry point, and optionally a set of candidate exit
//! points, computes the visiting sequence that minimizes total travel
//! distance. This is an open-path TSP variant, solved exactly by
//! branch-and-bound with a matrix-reduction lower bound under a wall-clock
//! budget, with a heuristic fallback when the budget expires.
//!
//! ## Modules
//!
//! - [`models`] — Node ids, the [`WarehouseMap`] boundary trait, solver
//!   configuration and result types
//! - [`distance`] — Dense cost matrix and the per-order restricted matrix
//! - [`reduction`] — Row/column-minimum reduction lower bound
//! - [`constructive`] — Nearest-neighbor seed heuristic
//! - [`local_search`] — Localized path refinement (segment reversal,
//!   adjacent swap)
//! - [`solver`] — Branch-and-bound search, brute-force oracle, and the
//!   run-time-bounded [`solve_path`] controller
//!
//! ## Example
//!
//! ```
//! use pickpath::distance::DistanceMatrix;
//! use pickpath::{solve_path, SolverConfig};
//!
//! // Four locations on a line: 0 (entry) — 1 — 2 — 3, unit spacing.
//! let mut map = DistanceMatrix::new(4);
//! for i in 0..4usize {
//!     for j in 0..4usize {
//!         if i != j {
//!             map.set(i, j, (i as f64 - j as f64).abs());
//!         }
//!     }
//! }
//!
//! let result = solve_path(&map, 0, &[1, 2, 3], &[], &SolverConfig::default()).unwrap();
//! assert_eq!(result.path, vec![0, 1, 2, 3]);
//! assert!((result.cost - 3.0).abs() < 1e-10);
//! assert!(result.exact);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod local_search;
pub mod models;
pub mod reduction;
pub mod solver;

pub use error::{Error, Result};
pub use models::{AccessMode, NodeId, SolveResult, SolverConfig, WarehouseMap};
pub use solver::solve_path;
