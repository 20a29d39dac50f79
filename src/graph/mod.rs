//! Road graph and single-pair shortest paths.
//!
//! - [`WeightedGraph`] — undirected weighted graph with Dijkstra queries
//! - [`RoadNetwork`] — the query interface the planner depends on

mod heap;
mod network;
mod weighted;

pub use network::RoadNetwork;
pub use weighted::{PathResult, WeightedGraph};
