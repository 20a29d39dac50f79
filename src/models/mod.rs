//! Domain model types for waypoint route planning.
//!
//! Provides the key-point set of a planning request (start, mandatory
//! waypoints, end) and the route returned to the caller.

mod key_points;
mod route;

pub use key_points::KeyPoints;
pub use route::Route;
