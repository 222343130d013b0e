//! Solve result type.

use serde::{Deserialize, Serialize};

use super::NodeId;

/// The outcome of one pick-path solve.
///
/// # Examples
///
/// ```
/// use pickpath::models::SolveResult;
///
/// let result = SolveResult {
///     path: vec![0, 3, 1, 2],
///     cost: 12.5,
///     exact: true,
/// };
/// assert_eq!(result.path.first(), Some(&0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Visiting order: the start node, every required stop exactly once,
    /// then the chosen end node when dynamic-end is active.
    pub path: Vec<NodeId>,
    /// Total travel cost along `path`.
    pub cost: f64,
    /// True only when a multi-access search exhausted its frontier without
    /// deadline interruption. Single-access results and interrupted
    /// searches are never exact.
    pub exact: bool,
}
