//! Road records: `cityA,cityB,distance`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::error::{Result, RoutingError};
use crate::graph::WeightedGraph;

/// Reads road records into a new graph.
///
/// Fields are trimmed. Rows without exactly three fields are skipped; a
/// distance that is not a finite, non-negative number aborts loading.
///
/// # Examples
///
/// ```
/// use waypoint_routing::io::load_roads;
///
/// let data = "from,to,miles\nA,B,5\nB,C,3\nbroken row\n";
/// let g = load_roads(data.as_bytes()).unwrap();
/// assert_eq!(g.num_edges(), 2);
/// assert!(g.has_city("C"));
/// ```
pub fn load_roads<R: Read>(reader: R) -> Result<WeightedGraph> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut graph = WeightedGraph::new();
    let mut skipped = 0usize;
    for record in rdr.records() {
        let record = record?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != 3 {
            warn!("skipping road record on line {line}: expected 3 fields, got {}", record.len());
            skipped += 1;
            continue;
        }
        let raw = &record[2];
        let distance: f64 = raw
            .parse()
            .ok()
            .filter(|d: &f64| d.is_finite() && *d >= 0.0)
            .ok_or_else(|| RoutingError::InvalidDistance {
                line,
                value: raw.to_string(),
            })?;
        graph.add_edge(&record[0], &record[1], distance);
    }

    debug!(
        "loaded {} roads between {} cities ({skipped} rows skipped)",
        graph.num_edges(),
        graph.num_cities()
    );
    Ok(graph)
}

/// Opens `path` and reads it with [`load_roads`].
pub fn load_roads_from_path<P: AsRef<Path>>(path: P) -> Result<WeightedGraph> {
    load_roads(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_basic() {
        let data = "CityA,CityB,Distance\nNew York NY, Philadelphia PA, 95\nPhiladelphia PA,Baltimore MD,100.5\n";
        let g = load_roads(data.as_bytes()).expect("valid");
        assert_eq!(g.num_cities(), 3);
        assert_eq!(g.edge_distance("Philadelphia PA", "New York NY"), Some(95.0));
        let res = g.shortest_path("New York NY", "Baltimore MD").expect("reachable");
        assert!((res.distance - 195.5).abs() < 1e-10);
    }

    #[test]
    fn test_skips_wrong_field_count() {
        let data = "a,b,d\nA,B,1\nA,B\nA,B,C,4\nB,C,2\n";
        let g = load_roads(data.as_bytes()).expect("valid");
        assert_eq!(g.num_edges(), 2);
    }

    #[test]
    fn test_header_only() {
        let g = load_roads("a,b,d\n".as_bytes()).expect("valid");
        assert_eq!(g.num_cities(), 0);
    }

    #[test]
    fn test_non_numeric_distance() {
        let data = "a,b,d\nA,B,1\nB,C,far\n";
        match load_roads(data.as_bytes()) {
            Err(RoutingError::InvalidDistance { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "far");
            }
            other => panic!("expected InvalidDistance, got {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_distance() {
        let data = "a,b,d\nA,B,inf\n";
        assert!(matches!(
            load_roads(data.as_bytes()),
            Err(RoutingError::InvalidDistance { .. })
        ));
    }

    #[test]
    fn test_negative_distance() {
        let data = "a,b,d\nA,B,-1\nB,C,1\nC,D,1\n";
        match load_roads(data.as_bytes()) {
            Err(RoutingError::InvalidDistance { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "-1");
            }
            other => panic!("expected InvalidDistance, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_distance_allowed() {
        let g = load_roads("a,b,d\nA,B,0\nB,C,2\n".as_bytes()).expect("valid");
        let res = g.shortest_path("A", "C").expect("reachable");
        assert!((res.distance - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_roads_from_path("/definitely/not/here.csv"),
            Err(RoutingError::Io(_))
        ));
    }
}
