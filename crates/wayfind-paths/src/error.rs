use std::fmt;

use thiserror::Error;
use wayfind_core::Point;

/// Which end of a search a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    OutOfBounds,
    Blocked,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::Blocked => f.write_str("blocked"),
        }
    }
}

/// Errors reported by the frontier and the search engine.
///
/// None of these leave a search in a broken state; the caller decides what
/// to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// Removal from a frontier with no entries.
    #[error("frontier is empty")]
    EmptyFrontier,
    /// The search exhausted every reachable cell without meeting the goal.
    #[error("no path from {from} to {to}")]
    NoPath { from: Point, to: Point },
    /// A start or goal coordinate the search cannot begin from.
    #[error("{endpoint} {point} is {reason}")]
    InvalidCoordinate {
        endpoint: Endpoint,
        point: Point,
        reason: InvalidReason,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = PathError::InvalidCoordinate {
            endpoint: Endpoint::Goal,
            point: Point::new(12, 3),
            reason: InvalidReason::OutOfBounds,
        };
        assert_eq!(err.to_string(), "goal (12, 3) is out of bounds");
        let err = PathError::NoPath {
            from: Point::new(0, 0),
            to: Point::new(4, 4),
        };
        assert_eq!(err.to_string(), "no path from (0, 0) to (4, 4)");
        assert_eq!(PathError::EmptyFrontier.to_string(), "frontier is empty");
    }
}
