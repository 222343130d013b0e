//! Domain model types for pick-path solving.
//!
//! Provides the core abstractions: warehouse node identifiers, the map
//! provider boundary trait, the per-solve configuration, and the solve
//! result returned to callers.

mod config;
mod map;
mod result;

pub use config::{AccessMode, SolverConfig};
pub use map::{NodeId, WarehouseMap};
pub use result::SolveResult;
