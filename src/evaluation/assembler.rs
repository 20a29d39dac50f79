//! Stitches key-point segments into a full city-by-city route.

use log::debug;

use crate::distance::KeyPointMatrix;
use crate::error::{Result, RoutingError};
use crate::graph::RoadNetwork;
use crate::models::Route;

/// Builds routes from a visiting order by concatenating the shortest path of
/// every consecutive segment.
///
/// Segment paths are concatenated with the shared junction city kept once,
/// and segment distances are summed into the route total.
///
/// # Examples
///
/// ```
/// use waypoint_routing::graph::WeightedGraph;
/// use waypoint_routing::models::KeyPoints;
/// use waypoint_routing::distance::KeyPointMatrix;
/// use waypoint_routing::evaluation::PathAssembler;
///
/// let mut g = WeightedGraph::new();
/// g.add_edge("A", "B", 1.0);
/// g.add_edge("B", "C", 2.0);
/// g.add_edge("C", "D", 3.0);
///
/// let matrix = KeyPointMatrix::build(&g, KeyPoints::new("A", "D", ["C"]));
/// let route = PathAssembler::new(&g).assemble(&[0, 1, 2], &matrix).unwrap();
/// assert_eq!(route.cities(), &["A", "B", "C", "D"]);
/// assert_eq!(route.stops(), &["A", "C", "D"]);
/// assert_eq!(route.total_distance(), 6.0);
/// ```
pub struct PathAssembler<'a, N: RoadNetwork + ?Sized> {
    network: &'a N,
}

impl<'a, N: RoadNetwork + ?Sized> PathAssembler<'a, N> {
    /// Creates an assembler over the given network.
    pub fn new(network: &'a N) -> Self {
        Self { network }
    }

    /// Assembles the route visiting the key points of `matrix` in the index
    /// order `order`.
    ///
    /// Segments come from the paths cached in `matrix`; the network is not
    /// queried again.
    ///
    /// # Errors
    ///
    /// [`RoutingError::NoPath`] for the first consecutive pair the matrix
    /// holds no path for.
    pub fn assemble(&self, order: &[usize], matrix: &KeyPointMatrix) -> Result<Route> {
        let key_points = matrix.key_points();
        let mut stitch = Stitch::default();

        let lookup = |from: usize, to: usize| {
            matrix.path(from, to).ok_or_else(|| RoutingError::NoPath {
                from: key_points.city(from).to_string(),
                to: key_points.city(to).to_string(),
            })
        };

        if let [only] = order {
            let segment = lookup(*only, *only)?;
            stitch.push(&segment.path, segment.distance);
        }
        for pair in order.windows(2) {
            let segment = lookup(pair[0], pair[1])?;
            stitch.push(&segment.path, segment.distance);
        }

        let stops = order.iter().map(|&i| key_points.city(i).to_string()).collect();
        Ok(stitch.finish(stops))
    }

    /// Assembles the route visiting `stops` (city names) in sequence,
    /// querying the network for every segment.
    ///
    /// A single stop yields the one-city route of distance 0.
    ///
    /// # Errors
    ///
    /// Propagates [`UnknownCity`](RoutingError::UnknownCity) or
    /// [`NoPath`](RoutingError::NoPath) from the first segment that cannot
    /// be connected.
    pub fn assemble_cities(&self, stops: &[&str]) -> Result<Route> {
        let mut stitch = Stitch::default();

        if let [only] = stops {
            let segment = self.network.try_shortest_path(only, only)?;
            stitch.push(&segment.path, segment.distance);
        }
        for pair in stops.windows(2) {
            let segment = self.network.try_shortest_path(pair[0], pair[1])?;
            stitch.push(&segment.path, segment.distance);
        }

        Ok(stitch.finish(stops.iter().map(|s| s.to_string()).collect()))
    }
}

#[derive(Default)]
struct Stitch {
    cities: Vec<String>,
    total_distance: f64,
}

impl Stitch {
    fn push(&mut self, path: &[String], distance: f64) {
        self.total_distance += distance;
        // junction city already ends the previous segment
        let skip = usize::from(!self.cities.is_empty());
        self.cities.extend(path.iter().skip(skip).cloned());
    }

    fn finish(self, stops: Vec<String>) -> Route {
        debug!(
            "assembled route: {} stops, {} cities, distance {}",
            stops.len(),
            self.cities.len(),
            self.total_distance
        );
        Route::new(self.cities, stops, self.total_distance)
    }
}
