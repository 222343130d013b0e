//! Matrix-reduction lower bound for branch-and-bound.

mod reduce;

pub use reduce::{reduce, strike};
