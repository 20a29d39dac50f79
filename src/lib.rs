//! # waypoint-routing
//!
//! Minimum-distance routes through a road network that start at one city,
//! end at another, and pass through a set of mandatory intermediate cities.
//!
//! ## Modules
//!
//! - [`graph`] — Undirected weighted road graph with Dijkstra shortest paths
//! - [`models`] — Key points of a request and the planned route
//! - [`distance`] — Distance matrix and all-pairs key-point shortest paths
//! - [`optimize`] — Exact waypoint ordering (bitmask DP) and a brute-force reference
//! - [`evaluation`] — Stitching segment paths into a full route
//! - [`io`] — CSV loading of roads and attraction lookups
//! - [`planner`] — The end-to-end [`RoutePlanner`]
//!
//! ## Example
//!
//! ```
//! use waypoint_routing::{RoutePlanner, graph::WeightedGraph};
//!
//! let mut g = WeightedGraph::new();
//! g.add_edge("A", "B", 5.0);
//! g.add_edge("B", "C", 3.0);
//! g.add_edge("A", "C", 10.0);
//!
//! let route = RoutePlanner::new(&g).plan_route("A", "C", ["B"]).unwrap();
//! assert_eq!(route.cities(), &["A", "B", "C"]);
//! assert_eq!(route.total_distance(), 8.0);
//! ```

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod graph;
pub mod io;
pub mod models;
pub mod optimize;
pub mod planner;

pub use error::{Result, RoutingError};
pub use planner::{PlannerConfig, RoutePlanner};
