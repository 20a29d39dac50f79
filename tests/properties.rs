//! Property-based tests over randomly generated road networks.

use proptest::prelude::*;

use waypoint_routing::distance::KeyPointMatrix;
use waypoint_routing::graph::WeightedGraph;
use waypoint_routing::models::KeyPoints;
use waypoint_routing::optimize::{exhaustive_order, optimize_order, permutations};
use waypoint_routing::RoutePlanner;

const EPS: f64 = 1e-9;

fn city(i: usize) -> String {
    format!("c{i}")
}

/// Integer weights keep sums exact. Every city gets a self-loop so it is
/// part of the network even when it has no other road.
fn build(n: usize, edges: &[(usize, usize, u32)]) -> WeightedGraph {
    let mut g = WeightedGraph::new();
    for i in 0..n {
        g.add_edge(&city(i), &city(i), 1.0);
    }
    for &(a, b, w) in edges {
        g.add_edge(&city(a), &city(b), f64::from(w));
    }
    g
}

fn network() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (2usize..9).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0u32..50), 0..24),
        )
    })
}

/// A network plus `k` cities picked from it.
fn network_with(k: usize) -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>, Vec<usize>)> {
    network().prop_flat_map(move |(n, edges)| {
        (Just(n), Just(edges), prop::collection::vec(0..n, k))
    })
}

fn request() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>, usize, usize, Vec<usize>)> {
    network().prop_flat_map(|(n, edges)| {
        (
            Just(n),
            Just(edges),
            0..n,
            0..n,
            prop::collection::vec(0..n, 0..5),
        )
    })
}

proptest! {
    #[test]
    fn shortest_distance_is_symmetric((n, edges, picked) in network_with(2)) {
        let (a, b) = (picked[0], picked[1]);
        let g = build(n, &edges);
        let ab = g.shortest_path(&city(a), &city(b)).map(|r| r.distance);
        let ba = g.shortest_path(&city(b), &city(a)).map(|r| r.distance);
        match (ab, ba) {
            (Some(x), Some(y)) => prop_assert!((x - y).abs() < EPS),
            (None, None) => {}
            other => prop_assert!(false, "asymmetric reachability: {:?}", other),
        }
    }

    #[test]
    fn triangle_inequality_holds((n, edges, picked) in network_with(3)) {
        let (a, b, c) = (picked[0], picked[1], picked[2]);
        let g = build(n, &edges);
        let d = |x: usize, y: usize| g.shortest_path(&city(x), &city(y)).map(|r| r.distance);
        if let (Some(ab), Some(bc)) = (d(a, b), d(b, c)) {
            let ac = d(a, c).expect("a reaches c through b");
            prop_assert!(ac <= ab + bc + EPS);
        }
    }

    #[test]
    fn dijkstra_path_is_valid((n, edges, picked) in network_with(2)) {
        let (a, b) = (city(picked[0]), city(picked[1]));
        let g = build(n, &edges);
        if let Some(res) = g.shortest_path(&a, &b) {
            prop_assert_eq!(res.path.first(), Some(&a));
            prop_assert_eq!(res.path.last(), Some(&b));
            let mut total = 0.0;
            for w in res.path.windows(2) {
                let edge = g.edge_distance(&w[0], &w[1]);
                prop_assert!(edge.is_some(), "no road {} - {}", w[0], w[1]);
                total += edge.unwrap_or_default();
            }
            prop_assert!((total - res.distance).abs() < EPS);
        }
    }

    #[test]
    fn dp_is_never_worse_than_any_permutation((n, edges, s, e, wps) in request()) {
        let g = build(n, &edges);
        let wp_names: Vec<String> = wps.iter().map(|&i| city(i)).collect();
        let key_points = KeyPoints::new(&city(s), &city(e), &wp_names);
        let k = key_points.num_waypoints();
        let matrix = KeyPointMatrix::build(&g, key_points);
        let dm = matrix.distances();

        let dp = optimize_order(dm, k);
        let brute = exhaustive_order(dm, k);
        prop_assert_eq!(dp.is_ok(), brute.is_ok());

        if let Ok(best) = dp {
            prop_assert!((best.distance - dm.path_length(&best.order)).abs() < EPS);
            for perm in permutations(k) {
                let mut order = vec![0];
                order.extend(perm);
                order.push(k + 1);
                prop_assert!(best.distance <= dm.path_length(&order) + EPS);
            }
            if let Ok(reference) = brute {
                prop_assert!((best.distance - reference.distance).abs() < EPS);
            }
        }
    }

    #[test]
    fn planned_route_is_valid((n, edges, s, e, wps) in request()) {
        let g = build(n, &edges);
        let wp_names: Vec<String> = wps.iter().map(|&i| city(i)).collect();
        let (start, end) = (city(s), city(e));
        let planner = RoutePlanner::new(&g);
        if let Ok(route) = planner.plan_route(&start, &end, &wp_names) {
            prop_assert_eq!(route.start(), Some(start.as_str()));
            prop_assert_eq!(route.end(), Some(end.as_str()));
            for w in &wp_names {
                prop_assert!(route.cities().contains(w), "missing waypoint {}", w);
            }
            let mut total = 0.0;
            for pair in route.cities().windows(2) {
                if pair[0] == pair[1] {
                    continue;
                }
                let edge = g.edge_distance(&pair[0], &pair[1]);
                prop_assert!(edge.is_some(), "no road {} - {}", pair[0], pair[1]);
                total += edge.unwrap_or_default();
            }
            prop_assert!((total - route.total_distance()).abs() < EPS);
        }
    }

    #[test]
    fn planning_is_idempotent((n, edges, s, e, wps) in request()) {
        let g = build(n, &edges);
        let wp_names: Vec<String> = wps.iter().map(|&i| city(i)).collect();
        let planner = RoutePlanner::new(&g);
        let first = planner.plan_route(&city(s), &city(e), &wp_names);
        let second = planner.plan_route(&city(s), &city(e), &wp_names);
        match (first, second) {
            (Ok(x), Ok(y)) => prop_assert!((x.total_distance() - y.total_distance()).abs() < EPS),
            (Err(_), Err(_)) => {}
            _ => prop_assert!(false, "outcome changed between identical requests"),
        }
    }

    #[test]
    fn no_waypoints_reduces_to_shortest_path((n, edges, picked) in network_with(2)) {
        let (s, e) = (picked[0], picked[1]);
        let g = build(n, &edges);
        let planned = RoutePlanner::new(&g).plan_route(&city(s), &city(e), Vec::<String>::new());
        let direct = g.shortest_path(&city(s), &city(e));
        match (planned, direct) {
            (Ok(route), Some(res)) => {
                prop_assert_eq!(route.cities(), res.path.as_slice());
                prop_assert_eq!(route.total_distance(), res.distance);
            }
            (Err(_), None) => {}
            other => prop_assert!(false, "mismatch: {:?}", other),
        }
    }
}
