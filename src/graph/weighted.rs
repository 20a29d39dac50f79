//! Undirected weighted road graph with Dijkstra shortest-path queries.
//!
//! # Algorithm
//!
//! Single-source Dijkstra with a binary min-heap and lazy deletion: stale
//! heap entries (popped with a distance larger than the settled one) are
//! skipped. The search stops as soon as the destination is popped.
//!
//! # Complexity
//!
//! O((V + E) log V) per query.
//!
//! # Reference
//!
//! Dijkstra, E.W. (1959). "A note on two problems in connexion with graphs",
//! *Numerische Mathematik* 1, 269-271.

use std::collections::{BinaryHeap, HashMap};

use log::trace;
use serde::{Deserialize, Serialize};

use super::heap::HeapItem;
use super::RoadNetwork;

/// A shortest path between two cities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Cities in travel order, both endpoints included.
    pub path: Vec<String>,
    /// Sum of edge weights along `path`.
    pub distance: f64,
}

impl PathResult {
    /// A zero-length path that stays at `city`.
    pub fn trivial(city: &str) -> Self {
        Self {
            path: vec![city.to_string()],
            distance: 0.0,
        }
    }
}

/// An undirected weighted graph of cities.
///
/// Cities are interned to dense indices on first sight; adjacency lists hold
/// `(neighbor index, distance)` pairs. Every edge inserted with
/// [`add_edge`](Self::add_edge) is traversable in both directions with the
/// same weight.
///
/// # Examples
///
/// ```
/// use waypoint_routing::graph::WeightedGraph;
///
/// let mut g = WeightedGraph::new();
/// g.add_edge("A", "B", 5.0);
/// g.add_edge("B", "C", 3.0);
/// g.add_edge("A", "C", 10.0);
///
/// let res = g.shortest_path("A", "C").unwrap();
/// assert_eq!(res.path, vec!["A", "B", "C"]);
/// assert!((res.distance - 8.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    index: HashMap<String, usize>,
    names: Vec<String>,
    adjacency: Vec<Vec<(usize, f64)>>,
    num_edges: usize,
}

impl WeightedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `city` appears in any stored edge.
    pub fn has_city(&self, city: &str) -> bool {
        self.index.contains_key(city)
    }

    /// Inserts an undirected edge between `a` and `b`.
    ///
    /// The distance is not validated; callers must supply a finite,
    /// non-negative value for query results to be meaningful.
    pub fn add_edge(&mut self, a: &str, b: &str, distance: f64) {
        let ia = self.intern(a);
        let ib = self.intern(b);
        self.adjacency[ia].push((ib, distance));
        self.adjacency[ib].push((ia, distance));
        self.num_edges += 1;
    }

    /// Number of distinct cities.
    pub fn num_cities(&self) -> usize {
        self.names.len()
    }

    /// Number of undirected edges inserted (parallel roads counted separately).
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Iterates over `(neighbor, distance)` pairs of `city`.
    ///
    /// Empty if the city is unknown.
    pub fn neighbors<'a>(&'a self, city: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.index
            .get(city)
            .map(|&i| self.adjacency[i].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(move |&(j, d)| (self.names[j].as_str(), d))
    }

    /// Returns the weight of the lightest direct road between `a` and `b`.
    pub fn edge_distance(&self, a: &str, b: &str) -> Option<f64> {
        let ib = *self.index.get(b)?;
        let ia = *self.index.get(a)?;
        self.adjacency[ia]
            .iter()
            .filter(|&&(j, _)| j == ib)
            .map(|&(_, d)| d)
            .min_by(f64::total_cmp)
    }

    /// Computes the minimum-distance path from `start` to `end`.
    ///
    /// Returns `None` if either city is absent or `end` is unreachable.
    /// When `start == end` the result is the single-node path with distance 0.
    pub fn shortest_path(&self, start: &str, end: &str) -> Option<PathResult> {
        let source = *self.index.get(start)?;
        let target = *self.index.get(end)?;

        let n = self.names.len();
        let mut distances = vec![f64::INFINITY; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut heap = BinaryHeap::with_capacity(n);

        distances[source] = 0.0;
        heap.push(HeapItem {
            node: source,
            distance: 0.0,
        });

        let mut popped = 0usize;
        while let Some(HeapItem { node, distance }) = heap.pop() {
            popped += 1;
            if node == target {
                break;
            }
            if distance > distances[node] {
                continue;
            }
            for &(next, weight) in &self.adjacency[node] {
                let candidate = distance + weight;
                if candidate < distances[next] {
                    distances[next] = candidate;
                    predecessors[next] = Some(node);
                    heap.push(HeapItem {
                        node: next,
                        distance: candidate,
                    });
                }
            }
        }
        trace!("dijkstra {start} -> {end}: {popped} heap pops");

        if distances[target] == f64::INFINITY {
            return None;
        }

        let mut path = vec![self.names[target].clone()];
        let mut current = target;
        while current != source {
            // every finite-distance node other than the source has a predecessor
            current = predecessors[current]?;
            path.push(self.names[current].clone());
        }
        path.reverse();

        Some(PathResult {
            path,
            distance: distances[target],
        })
    }

    fn intern(&mut self, city: &str) -> usize {
        if let Some(&i) = self.index.get(city) {
            return i;
        }
        let i = self.names.len();
        self.index.insert(city.to_string(), i);
        self.names.push(city.to_string());
        self.adjacency.push(Vec::new());
        i
    }
}

impl RoadNetwork for WeightedGraph {
    fn has_city(&self, city: &str) -> bool {
        WeightedGraph::has_city(self, city)
    }

    fn shortest_path(&self, from: &str, to: &str) -> Option<PathResult> {
        WeightedGraph::shortest_path(self, from, to)
    }
}
