//! Constructive heuristics seeding the exact search.
//!
//! - [`nearest_neighbor_path`] — Greedy nearest-neighbor walk, O(k²)
//! - [`insertion_order_path`] — Stops in the order the caller listed them

mod nearest_neighbor;

pub use nearest_neighbor::{insertion_order_path, nearest_neighbor_path};
