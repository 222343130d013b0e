//! Crate error taxonomy.

use thiserror::Error;

use crate::models::NodeId;

/// Convenient result alias for the pickpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// Deadline expiry is deliberately absent: an interrupted solve still
/// returns a valid path and is surfaced through
/// [`SolveResult::exact`](crate::SolveResult) instead of an error.
#[derive(Debug, Error)]
pub enum Error {
    /// No feasible pick path can include the given location.
    #[error("no feasible pick path through location {node}")]
    InvalidTopology { node: NodeId },

    /// The order contains no stops; there is nothing to solve.
    #[error("order contains no stops")]
    EmptyOrder,

    /// The solver was wired incorrectly; indicates a defect in the caller,
    /// not a routable condition.
    #[error("solver configuration error: {message}")]
    ConfigurationError { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::InvalidTopology { node: 7 };
        assert_eq!(err.to_string(), "no feasible pick path through location 7");
        assert_eq!(Error::EmptyOrder.to_string(), "order contains no stops");
    }
}
