//! Brute-force waypoint ordering over every permutation.

use crate::distance::DistanceMatrix;
use crate::error::{Result, RoutingError};

use super::WaypointOrder;

/// Iterator over all orderings of the waypoint indices `1..=n`, in
/// lexicographic order.
///
/// Each item is a freshly allocated `Vec`; the iterator's internal state is
/// never handed out.
///
/// # Examples
///
/// ```
/// use waypoint_routing::optimize::permutations;
///
/// let all: Vec<Vec<usize>> = permutations(3).collect();
/// assert_eq!(all.len(), 6);
/// assert_eq!(all[0], vec![1, 2, 3]);
/// assert_eq!(all[5], vec![3, 2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    next: Option<Vec<usize>>,
}

/// Returns an iterator over every ordering of `1..=n`.
///
/// `n = 0` yields exactly one empty ordering.
pub fn permutations(n: usize) -> Permutations {
    Permutations {
        next: Some((1..=n).collect()),
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.next.take()?;
        self.next = successor(&current);
        Some(current)
    }
}

/// Lexicographic successor of `perm`, or `None` if it is the last one.
fn successor(perm: &[usize]) -> Option<Vec<usize>> {
    let pivot = perm.windows(2).rposition(|w| w[0] < w[1])?;
    let swap = perm.iter().rposition(|&x| x > perm[pivot])?;
    let mut next = perm.to_vec();
    next.swap(pivot, swap);
    next[pivot + 1..].reverse();
    Some(next)
}

/// Finds the cheapest waypoint order by trying every permutation.
///
/// Same contract as [`optimize_order`](super::optimize_order); among equal
/// costs the lexicographically first order wins. Factorial in `n`.
///
/// # Errors
///
/// [`RoutingError::InfeasibleOrdering`] if every order has infinite cost.
pub fn exhaustive_order(distances: &DistanceMatrix, n: usize) -> Result<WaypointOrder> {
    let end = n + 1;
    permutations(n)
        .map(|perm| {
            let order: Vec<usize> = std::iter::once(0)
                .chain(perm)
                .chain(std::iter::once(end))
                .collect();
            let distance = distances.path_length(&order);
            WaypointOrder { order, distance }
        })
        .filter(|candidate| candidate.distance.is_finite())
        .fold(None, |best: Option<WaypointOrder>, candidate| match best {
            Some(b) if b.distance <= candidate.distance => Some(b),
            _ => Some(candidate),
        })
        .ok_or(RoutingError::InfeasibleOrdering { waypoints: n })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimize::optimize_order;

    #[test]
    fn test_permutation_counts() {
        assert_eq!(permutations(0).count(), 1);
        assert_eq!(permutations(1).count(), 1);
        assert_eq!(permutations(4).count(), 24);
        assert_eq!(permutations(5).count(), 120);
    }

    #[test]
    fn test_permutations_distinct_and_sorted() {
        let all: Vec<Vec<usize>> = permutations(4).collect();
        for w in all.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn test_empty_permutation() {
        assert_eq!(permutations(0).next(), Some(vec![]));
    }

    #[test]
    fn test_exhaustive_matches_dp() {
        let dm = DistanceMatrix::from_data(
            5,
            vec![
                0.0, 4.0, 2.0, 7.0, 9.0, //
                4.0, 0.0, 3.0, 2.0, 5.0, //
                2.0, 3.0, 0.0, 6.0, 8.0, //
                7.0, 2.0, 6.0, 0.0, 1.0, //
                9.0, 5.0, 8.0, 1.0, 0.0,
            ],
        )
        .expect("valid");
        let brute = exhaustive_order(&dm, 3).expect("feasible");
        let dp = optimize_order(&dm, 3).expect("feasible");
        // 0 -> 2 -> 1 -> 3 -> 4 = 2 + 3 + 2 + 1
        assert_eq!(brute.order, vec![0, 2, 1, 3, 4]);
        assert!((brute.distance - 8.0).abs() < 1e-10);
        assert!((dp.distance - brute.distance).abs() < 1e-10);
    }

    #[test]
    fn test_exhaustive_infeasible() {
        let mut dm = DistanceMatrix::unreachable(3);
        dm.set_symmetric(0, 2, 1.0);
        assert!(matches!(
            exhaustive_order(&dm, 1),
            Err(RoutingError::InfeasibleOrdering { waypoints: 1 })
        ));
    }
}
