//! Localized improvement of complete pick paths.
//!
//! - [`two_opt_pass`] — Open-path segment reversal
//! - [`swap_pass`] — Adjacent stop exchange
//! - [`refine`] — Alternates both passes to a local optimum or a pass cap

mod refine;
mod swap;
mod two_opt;

pub use refine::{refine, DEFAULT_MAX_PASSES};
pub use swap::swap_pass;
pub use two_opt::two_opt_pass;

/// Minimum strict improvement for a move to be accepted.
const EPSILON: f64 = 1e-10;
