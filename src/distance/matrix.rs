//! Dense distance matrix.

/// A dense n×n distance matrix stored in row-major order.
///
/// Unreachable pairs hold `f64::INFINITY`.
///
/// # Examples
///
/// ```
/// use waypoint_routing::distance::DistanceMatrix;
///
/// let mut dm = DistanceMatrix::unreachable(3);
/// dm.set_symmetric(0, 1, 5.0);
/// assert_eq!(dm.get(1, 0), 5.0);
/// assert_eq!(dm.get(0, 0), 0.0);
/// assert!(dm.get(0, 2).is_infinite());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a matrix where every off-diagonal entry is unreachable.
    pub fn unreachable(size: usize) -> Self {
        let mut dm = Self {
            data: vec![f64::INFINITY; size * size],
            size,
        };
        for i in 0..size {
            dm.set(i, i, 0.0);
        }
        dm
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Sets both `(a, b)` and `(b, a)`.
    pub fn set_symmetric(&mut self, a: usize, b: usize, distance: f64) {
        self.set(a, b, distance);
        self.set(b, a, distance);
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `to` is reachable from `from`.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Two infinite entries compare equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol || a.is_infinite() || b.is_infinite() {
                    return false;
                }
            }
        }
        true
    }

    /// Total distance of visiting `order` in sequence.
    ///
    /// Zero for sequences shorter than two; infinite if any leg is unreachable.
    pub fn path_length(&self, order: &[usize]) -> f64 {
        order.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5.0);
        assert_eq!(dm.get(1, 0), 5.0);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_none());
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42.0);
        assert_eq!(dm.get(0, 1), 42.0);
        assert_eq!(dm.get(1, 0), 0.0);
    }

    #[test]
    fn test_unreachable() {
        let dm = DistanceMatrix::unreachable(3);
        assert_eq!(dm.size(), 3);
        for i in 0..3 {
            assert_eq!(dm.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(dm.is_reachable(i, j), i == j);
            }
        }
        assert!(dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10.0);
        dm.set(1, 0, 15.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_asymmetric_reachability() {
        let mut dm = DistanceMatrix::unreachable(2);
        dm.set(0, 1, 1.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_path_length() {
        let mut dm = DistanceMatrix::unreachable(3);
        dm.set_symmetric(0, 1, 2.0);
        dm.set_symmetric(1, 2, 3.0);
        assert!((dm.path_length(&[0, 1, 2]) - 5.0).abs() < 1e-10);
        assert_eq!(dm.path_length(&[1]), 0.0);
        assert!(dm.path_length(&[0, 2]).is_infinite());
    }
}
