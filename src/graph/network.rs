//! Road network query trait.

use super::PathResult;
use crate::error::{Result, RoutingError};

/// Shortest-path queries over a read-only road network.
///
/// The key-point matrix, path assembler, and planner are written against
/// this trait so any graph representation can back them. Implementations
/// must not change between queries of a single planning request.
///
/// # Examples
///
/// ```
/// use waypoint_routing::graph::{PathResult, RoadNetwork};
///
/// struct Line;
///
/// impl RoadNetwork for Line {
///     fn has_city(&self, city: &str) -> bool {
///         city == "A" || city == "B"
///     }
///     fn shortest_path(&self, from: &str, to: &str) -> Option<PathResult> {
///         if !self.has_city(from) || !self.has_city(to) {
///             return None;
///         }
///         let path = if from == to { vec![from] } else { vec![from, to] };
///         let distance = if from == to { 0.0 } else { 2.0 };
///         Some(PathResult { path: path.into_iter().map(String::from).collect(), distance })
///     }
/// }
///
/// assert!(Line.try_shortest_path("A", "C").is_err());
/// assert_eq!(Line.try_shortest_path("A", "B").unwrap().distance, 2.0);
/// ```
pub trait RoadNetwork: Send + Sync {
    /// Returns `true` if `city` is part of the network.
    fn has_city(&self, city: &str) -> bool;

    /// Minimum-distance path from `from` to `to`, or `None` if either city
    /// is unknown or `to` is unreachable.
    fn shortest_path(&self, from: &str, to: &str) -> Option<PathResult>;

    /// Like [`shortest_path`](Self::shortest_path) but reports why no path
    /// was found.
    fn try_shortest_path(&self, from: &str, to: &str) -> Result<PathResult> {
        for city in [from, to] {
            if !self.has_city(city) {
                return Err(RoutingError::UnknownCity {
                    city: city.to_string(),
                });
            }
        }
        self.shortest_path(from, to).ok_or_else(|| RoutingError::NoPath {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}
