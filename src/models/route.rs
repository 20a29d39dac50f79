//! Planned route type.

use serde::{Deserialize, Serialize};

/// The result of a planning request.
///
/// `cities` is the full city-by-city path: every intermediate city of every
/// road segment, with each junction between segments appearing once.
/// `stops` is the resolved key-point order (start, waypoints in visiting
/// order, end).
///
/// # Examples
///
/// ```
/// use waypoint_routing::models::Route;
///
/// let route = Route::new(
///     vec!["A".into(), "B".into(), "C".into()],
///     vec!["A".into(), "C".into()],
///     8.0,
/// );
/// assert_eq!(route.start(), Some("A"));
/// assert_eq!(route.end(), Some("C"));
/// assert_eq!(route.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    cities: Vec<String>,
    stops: Vec<String>,
    total_distance: f64,
}

impl Route {
    /// Creates a route from its full path, key-point order, and distance.
    pub fn new(cities: Vec<String>, stops: Vec<String>, total_distance: f64) -> Self {
        Self {
            cities,
            stops,
            total_distance,
        }
    }

    /// The full ordered city path.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// The key points in visiting order.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Sum of road distances along the path.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// First city of the path.
    pub fn start(&self) -> Option<&str> {
        self.cities.first().map(String::as_str)
    }

    /// Last city of the path.
    pub fn end(&self) -> Option<&str> {
        self.cities.last().map(String::as_str)
    }

    /// Number of cities on the path.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the path has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
