//! All-pairs shortest paths restricted to a request's key points.
//!
//! # Complexity
//!
//! (n + 2)² − (n + 2) single-pair shortest-path queries, where n is the
//! number of mandatory waypoints. Each pair is independent, so with the
//! `parallel` feature the rows can be computed concurrently.

use log::{debug, trace};

use super::DistanceMatrix;
use crate::graph::{PathResult, RoadNetwork};
use crate::models::KeyPoints;

/// Shortest distances and paths between every ordered pair of key points.
///
/// The diagonal holds distance 0 with a single-node path.
///
/// # Examples
///
/// ```
/// use waypoint_routing::graph::WeightedGraph;
/// use waypoint_routing::models::KeyPoints;
/// use waypoint_routing::distance::KeyPointMatrix;
///
/// let mut g = WeightedGraph::new();
/// g.add_edge("A", "B", 5.0);
/// g.add_edge("B", "C", 3.0);
///
/// let kp = KeyPoints::new("A", "C", ["B"]);
/// let m = KeyPointMatrix::build(&g, kp);
/// assert_eq!(m.distances().get(0, 2), 8.0);
/// assert_eq!(m.path(0, 2).unwrap().path, vec!["A", "B", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct KeyPointMatrix {
    key_points: KeyPoints,
    distances: DistanceMatrix,
    paths: Vec<Option<PathResult>>,
}

impl KeyPointMatrix {
    /// Queries `network` for every ordered pair of key points.
    pub fn build<N: RoadNetwork + ?Sized>(network: &N, key_points: KeyPoints) -> Self {
        let size = key_points.len();
        let rows: Vec<Vec<Option<PathResult>>> = (0..size)
            .map(|i| compute_row(network, &key_points, i))
            .collect();
        Self::from_rows(key_points, rows)
    }

    /// Same as [`build`](Self::build), computing rows on the rayon thread pool.
    #[cfg(feature = "parallel")]
    pub fn build_parallel<N: RoadNetwork + ?Sized>(network: &N, key_points: KeyPoints) -> Self {
        use rayon::prelude::*;

        let size = key_points.len();
        let rows: Vec<Vec<Option<PathResult>>> = (0..size)
            .into_par_iter()
            .map(|i| compute_row(network, &key_points, i))
            .collect();
        Self::from_rows(key_points, rows)
    }

    fn from_rows(key_points: KeyPoints, rows: Vec<Vec<Option<PathResult>>>) -> Self {
        let size = key_points.len();
        let mut distances = DistanceMatrix::unreachable(size);
        let mut paths = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            for (j, entry) in row.into_iter().enumerate() {
                if let Some(res) = &entry {
                    distances.set(i, j, res.distance);
                }
                paths.push(entry);
            }
        }
        let unreachable = paths.iter().filter(|p| p.is_none()).count();
        debug!(
            "key-point matrix: {size}x{size}, {} queries, {unreachable} unreachable pairs",
            size * size.saturating_sub(1)
        );
        Self {
            key_points,
            distances,
            paths,
        }
    }

    /// The key points this matrix was built for.
    pub fn key_points(&self) -> &KeyPoints {
        &self.key_points
    }

    /// Shortest distances between key points (`f64::INFINITY` if unreachable).
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Shortest path from key point `from` to key point `to`, if one exists.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn path(&self, from: usize, to: usize) -> Option<&PathResult> {
        self.paths[from * self.key_points.len() + to].as_ref()
    }

    /// Number of key points (`n + 2`).
    pub fn size(&self) -> usize {
        self.key_points.len()
    }
}

fn compute_row<N: RoadNetwork + ?Sized>(
    network: &N,
    key_points: &KeyPoints,
    i: usize,
) -> Vec<Option<PathResult>> {
    let from = key_points.city(i);
    (0..key_points.len())
        .map(|j| {
            let to = key_points.city(j);
            if i == j {
                // a key point missing from the network has no trivial path either
                return network.has_city(from).then(|| PathResult::trivial(from));
            }
            let res = network.shortest_path(from, to);
            trace!(
                "key pair {from} -> {to}: {}",
                res.as_ref()
                    .map_or_else(|| "unreachable".to_string(), |r| r.distance.to_string())
            );
            res
        })
        .collect()
}
