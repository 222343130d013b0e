//! Pick-path solvers and the run-time-bounded controller.
//!
//! - [`branch_and_bound`] — Exact depth-first search with matrix-reduction
//!   pruning
//! - [`brute_force`] — Exhaustive permutation oracle for small orders
//! - [`solve_path`] — The deadline-bounded entry point

mod branch_and_bound;
mod brute_force;
mod controller;

pub use branch_and_bound::{branch_and_bound, SearchOutcome};
pub use brute_force::brute_force;
pub use controller::{solve_path, Deadline};
