//! Exact waypoint ordering by bitmask dynamic programming.
//!
//! # Algorithm
//!
//! `dp[mask][p]` is the cheapest cost of leaving the start, visiting exactly
//! the waypoints in `mask`, and standing at key point `p`. From every finite
//! state the search moves to each unvisited waypoint, or directly to the end
//! (index `n + 1`), which is terminal. The answer is `dp[full][n + 1]`.
//!
//! Masks are processed in increasing numeric order, so every state is final
//! before it is expanded (a transition only ever adds bits).
//!
//! # Complexity
//!
//! O(2ⁿ · n²) time, O(2ⁿ · n) memory.
//!
//! # Reference
//!
//! Held, M. & Karp, R.M. (1962). "A dynamic programming approach to
//! sequencing problems", *J. SIAM* 10(1), 196-210.

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};

/// Largest waypoint count the DP table is allowed to address.
///
/// The table holds 2ⁿ·(n + 2) entries of 9 bytes, about 200 MB at this limit.
pub const MAX_DP_WAYPOINTS: usize = 20;

const NO_PRED: u8 = u8::MAX;

/// A visiting order of key points and its total distance.
#[derive(Debug, Clone, PartialEq)]
pub struct WaypointOrder {
    /// Key-point indices in travel order, starting at 0 and ending at `n + 1`.
    pub order: Vec<usize>,
    /// Sum of key-point distances along `order`.
    pub distance: f64,
}

/// Finds the order of the `n` mandatory waypoints that minimizes the total
/// distance from the start (index 0) to the end (index `n + 1`).
///
/// `distances` must be an `(n + 2) × (n + 2)` key-point matrix. Ties are
/// resolved in favour of the transition evaluated first (lower waypoint
/// index).
///
/// # Errors
///
/// - [`RoutingError::InfeasibleOrdering`] if every order has infinite cost.
/// - [`RoutingError::TooManyWaypoints`] if `n` exceeds [`MAX_DP_WAYPOINTS`].
///
/// # Examples
///
/// ```
/// use waypoint_routing::distance::DistanceMatrix;
/// use waypoint_routing::optimize::optimize_order;
///
/// // 0 = start, 1..=2 = waypoints, 3 = end
/// let dm = DistanceMatrix::from_data(4, vec![
///     0.0, 1.0, 5.0, 9.0,
///     1.0, 0.0, 2.0, 7.0,
///     5.0, 2.0, 0.0, 1.0,
///     9.0, 7.0, 1.0, 0.0,
/// ]).unwrap();
///
/// let best = optimize_order(&dm, 2).unwrap();
/// assert_eq!(best.order, vec![0, 1, 2, 3]);
/// assert_eq!(best.distance, 4.0);
/// ```
pub fn optimize_order(distances: &DistanceMatrix, n: usize) -> Result<WaypointOrder> {
    if n > MAX_DP_WAYPOINTS {
        return Err(RoutingError::TooManyWaypoints {
            count: n,
            limit: MAX_DP_WAYPOINTS,
        });
    }
    debug_assert_eq!(distances.size(), n + 2, "matrix must cover n + 2 key points");

    let width = n + 2;
    let end = n + 1;
    let num_masks = 1usize << n;
    let full = num_masks - 1;

    let mut cost = vec![f64::INFINITY; num_masks * width];
    let mut pred = vec![NO_PRED; num_masks * width];
    cost[0] = 0.0;

    for mask in 0..num_masks {
        // the end is terminal, so only positions 0..=n expand
        for pos in 0..end {
            let current = cost[mask * width + pos];
            if current == f64::INFINITY {
                continue;
            }

            for v in 1..=n {
                let bit = 1 << (v - 1);
                if mask & bit != 0 || !distances.is_reachable(pos, v) {
                    continue;
                }
                let next = (mask | bit) * width + v;
                let candidate = current + distances.get(pos, v);
                if candidate < cost[next] {
                    cost[next] = candidate;
                    pred[next] = pos as u8;
                }
            }

            if !distances.is_reachable(pos, end) {
                continue;
            }
            let next = mask * width + end;
            let candidate = current + distances.get(pos, end);
            if candidate < cost[next] {
                cost[next] = candidate;
                pred[next] = pos as u8;
            }
        }
    }

    let best = cost[full * width + end];
    debug!(
        "waypoint DP: {n} waypoints, {} states, best = {best}",
        num_masks * width
    );
    if best == f64::INFINITY {
        return Err(RoutingError::InfeasibleOrdering { waypoints: n });
    }

    let order = reconstruct(&pred, width, full, end);
    Ok(WaypointOrder {
        order,
        distance: best,
    })
}

/// Walks predecessor records back from `(full, end)` to the start.
///
/// A waypoint's bit is cleared once its own predecessor has been read, so
/// the walk always looks up the state the forward pass actually filled.
fn reconstruct(pred: &[u8], width: usize, full: usize, end: usize) -> Vec<usize> {
    let mut order = vec![end];
    let mut mask = full;
    let mut current = end;

    while current != 0 {
        let prev = pred[mask * width + current];
        debug_assert_ne!(prev, NO_PRED, "finite state without predecessor");
        if current != end {
            mask &= !(1 << (current - 1));
        }
        current = prev as usize;
        order.push(current);
    }

    order.reverse();
    order
}
