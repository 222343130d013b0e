//! Solver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How the branch-and-bound frontier is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccessMode {
    /// Search rooted only at the designated entry stop: the cheapest first
    /// stop reachable from the start, lowest index on ties.
    ///
    /// Faster than [`AccessMode::Multi`] but never globally optimal by
    /// construction, since alternative entries are not searched. Results in
    /// this mode are at best optimal relative to the fixed entry and are
    /// never marked exact.
    Single,
    /// Search rooted at every admissible entry stop. Required for a result
    /// to be marked exact.
    Multi,
}

/// Per-solve configuration. Supplied once per solve call and never mutated
/// while the search runs.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use pickpath::models::{AccessMode, SolverConfig};
///
/// let config = SolverConfig::default();
/// assert_eq!(config.max_run_time, Duration::from_secs(15));
/// assert_eq!(config.access_mode, AccessMode::Multi);
/// assert!(config.dynamic_end);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Wall-clock budget for the branch-and-bound search. When it elapses
    /// the best known path so far is returned, marked non-exact.
    pub max_run_time: Duration,
    /// Frontier seeding mode.
    pub access_mode: AccessMode,
    /// When false, any end candidates passed to the solver are ignored and
    /// the path may end at whichever stop is visited last.
    pub dynamic_end: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_run_time: Duration::from_secs(15),
            access_mode: AccessMode::Multi,
            dynamic_end: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.max_run_time, Duration::from_secs(15));
        assert_eq!(config.access_mode, AccessMode::Multi);
        assert!(config.dynamic_end);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = SolverConfig {
            max_run_time: Duration::from_millis(2500),
            access_mode: AccessMode::Single,
            dynamic_end: false,
        };
        let json = serde_json::to_string(&config).expect("serialize");
        let back: SolverConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, config);
    }
}
