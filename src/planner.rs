//! Route planning through mandatory waypoints.
//!
//! Ties the pieces together: the key-point matrix is built from shortest-path
//! queries, the DP picks the visiting order, and the assembler expands the
//! order into the full city path.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::distance::KeyPointMatrix;
use crate::error::{Result, RoutingError};
use crate::evaluation::PathAssembler;
use crate::graph::RoadNetwork;
use crate::io::AttractionIndex;
use crate::models::{KeyPoints, Route};
use crate::optimize::{optimize_order, MAX_DP_WAYPOINTS};

/// Planner settings.
///
/// # Examples
///
/// ```
/// use waypoint_routing::PlannerConfig;
///
/// let config: PlannerConfig = serde_json::from_str(r#"{ "max_waypoints": 8 }"#).unwrap();
/// assert_eq!(config.max_waypoints, 8);
/// assert!(!config.parallel_matrix);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Maximum number of distinct mandatory waypoints per request.
    ///
    /// Capped at [`MAX_DP_WAYPOINTS`]. Memory grows as 2ⁿ·(n + 2): 16
    /// waypoints need about 10 MB, 20 about 200 MB.
    pub max_waypoints: usize,
    /// Build the key-point matrix on the rayon pool. Only takes effect with
    /// the `parallel` feature.
    pub parallel_matrix: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_waypoints: 16,
            parallel_matrix: false,
        }
    }
}

impl PlannerConfig {
    /// The waypoint limit actually enforced.
    pub fn effective_max_waypoints(&self) -> usize {
        self.max_waypoints.min(MAX_DP_WAYPOINTS)
    }
}

/// Plans minimum-distance routes over a read-only road network.
///
/// The network is only borrowed, so one network can serve many planners
/// (and, being `Sync`, many threads) at once.
///
/// # Examples
///
/// ```
/// use waypoint_routing::{RoutePlanner, graph::WeightedGraph};
///
/// let mut g = WeightedGraph::new();
/// g.add_edge("A", "B", 1.0);
/// g.add_edge("B", "C", 1.0);
/// g.add_edge("A", "D", 1.0);
/// g.add_edge("D", "C", 1.0);
///
/// let planner = RoutePlanner::new(&g);
/// let route = planner.plan_route("A", "C", ["B", "D"]).unwrap();
/// assert_eq!(route.start(), Some("A"));
/// assert_eq!(route.end(), Some("C"));
/// assert_eq!(route.total_distance(), 4.0);
/// ```
pub struct RoutePlanner<'a, N: RoadNetwork + ?Sized> {
    network: &'a N,
    config: PlannerConfig,
}

impl<'a, N: RoadNetwork + ?Sized> RoutePlanner<'a, N> {
    /// Creates a planner with the default configuration.
    pub fn new(network: &'a N) -> Self {
        Self::with_config(network, PlannerConfig::default())
    }

    /// Creates a planner with an explicit configuration.
    pub fn with_config(network: &'a N, config: PlannerConfig) -> Self {
        Self { network, config }
    }

    /// The active configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Computes the shortest route from `start` to `end` that passes through
    /// every city in `mandatory`.
    ///
    /// Duplicate mandatory cities, and mandatory cities equal to `start` or
    /// `end`, are ignored.
    ///
    /// # Errors
    ///
    /// - [`RoutingError::UnknownCity`] if the start, end, or any mandatory
    ///   city is not in the network.
    /// - [`RoutingError::TooManyWaypoints`] if the request exceeds the
    ///   configured limit.
    /// - [`RoutingError::NoPath`] if, without waypoints, the end is
    ///   unreachable.
    /// - [`RoutingError::InfeasibleOrdering`] if no order connects all
    ///   waypoints and the end.
    pub fn plan_route<I, S>(&self, start: &str, end: &str, mandatory: I) -> Result<Route>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let key_points = KeyPoints::new(start, end, mandatory);
        for city in key_points.cities() {
            if !self.network.has_city(city) {
                return Err(RoutingError::UnknownCity { city: city.clone() });
            }
        }

        let n = key_points.num_waypoints();
        let limit = self.config.effective_max_waypoints();
        if n > limit {
            return Err(RoutingError::TooManyWaypoints { count: n, limit });
        }

        let assembler = PathAssembler::new(self.network);
        if n == 0 {
            let direct = assembler.assemble_cities(&[start, end])?;
            info!("planned {start} -> {end}: direct, {}", direct.total_distance());
            return Ok(direct);
        }

        let matrix = self.build_matrix(key_points);
        let best = optimize_order(matrix.distances(), n)?;
        debug!(
            "visiting order: {:?}",
            best.order
                .iter()
                .map(|&i| matrix.key_points().city(i))
                .collect::<Vec<_>>()
        );

        let route = assembler.assemble(&best.order, &matrix)?;
        info!(
            "planned {start} -> {end} via {n} waypoints: {} cities, {}",
            route.len(),
            route.total_distance()
        );
        Ok(route)
    }

    /// Like [`plan_route`](Self::plan_route), with the mandatory cities taken
    /// from attraction names. Unknown attraction names are skipped.
    pub fn plan_with_attractions<I, S>(
        &self,
        start: &str,
        end: &str,
        attractions: I,
        index: &AttractionIndex,
    ) -> Result<Route>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cities = index.resolve(attractions);
        self.plan_route(start, end, cities)
    }

    #[cfg(feature = "parallel")]
    fn build_matrix(&self, key_points: KeyPoints) -> KeyPointMatrix {
        if self.config.parallel_matrix {
            KeyPointMatrix::build_parallel(self.network, key_points)
        } else {
            KeyPointMatrix::build(self.network, key_points)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn build_matrix(&self, key_points: KeyPoints) -> KeyPointMatrix {
        KeyPointMatrix::build(self.network, key_points)
    }
}
