//! Cost matrices.
//!
//! Provides a dense pairwise cost matrix and the per-order restricted
//! matrix the solvers operate on.

mod matrix;
mod order;

pub use matrix::DistanceMatrix;
pub use order::OrderMatrix;
