//! Error types for route planning and road-data loading.

use thiserror::Error;

/// Errors produced while loading road data or planning a route.
///
/// The first three variants are the "no result" outcomes of a planning
/// request; none of them is retried internally.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// A start, end, or mandatory city does not appear in the road network.
    #[error("city not found in road network: {city}")]
    UnknownCity {
        /// The city that was looked up.
        city: String,
    },

    /// No road connection exists between two required cities.
    #[error("no path from {from} to {to}")]
    NoPath {
        /// Origin of the failed query.
        from: String,
        /// Destination of the failed query.
        to: String,
    },

    /// Every visiting order of the mandatory waypoints has infinite cost.
    #[error("no feasible order visits all {waypoints} waypoints")]
    InfeasibleOrdering {
        /// Number of mandatory waypoints in the request.
        waypoints: usize,
    },

    /// The request exceeds the configured waypoint limit.
    #[error("{count} mandatory waypoints exceeds the limit of {limit}")]
    TooManyWaypoints {
        /// Distinct mandatory waypoints requested.
        count: usize,
        /// Configured maximum.
        limit: usize,
    },

    /// A road record carried a distance that is not a finite number.
    #[error("invalid distance {value:?} on line {line}")]
    InvalidDistance {
        /// 1-based line number in the source file.
        line: u64,
        /// The raw field text.
        value: String,
    },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed CSV input.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl RoutingError {
    /// Returns `true` for the "no result" outcomes of a planning request
    /// (unknown city, no path, infeasible ordering).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownCity { .. } | Self::NoPath { .. } | Self::InfeasibleOrdering { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RoutingError>;
