//! Key points of a planning request.

/// The cities a planning request must explicitly account for.
///
/// Indexed as `0 = start`, `1..=n = waypoints`, `n + 1 = end`, where `n` is
/// the number of distinct mandatory waypoints. Duplicate waypoints are
/// collapsed (first occurrence wins) and waypoints equal to the start or end
/// are dropped, since they are visited anyway.
///
/// # Examples
///
/// ```
/// use waypoint_routing::models::KeyPoints;
///
/// let kp = KeyPoints::new("A", "C", ["B", "A", "B", "D"]);
/// assert_eq!(kp.num_waypoints(), 2);
/// assert_eq!(kp.city(0), "A");
/// assert_eq!(kp.city(1), "B");
/// assert_eq!(kp.city(2), "D");
/// assert_eq!(kp.city(kp.end_index()), "C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPoints {
    cities: Vec<String>,
}

impl KeyPoints {
    /// Builds the key-point set for a request.
    pub fn new<I, S>(start: &str, end: &str, mandatory: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cities = vec![start.to_string()];
        for city in mandatory {
            let city = city.as_ref();
            if city == start || city == end || cities[1..].iter().any(|c| c == city) {
                continue;
            }
            cities.push(city.to_string());
        }
        cities.push(end.to_string());
        Self { cities }
    }

    /// The start city.
    pub fn start(&self) -> &str {
        &self.cities[0]
    }

    /// The end city.
    pub fn end(&self) -> &str {
        &self.cities[self.end_index()]
    }

    /// The distinct mandatory waypoints, in request order.
    pub fn waypoints(&self) -> &[String] {
        &self.cities[1..self.end_index()]
    }

    /// Number of distinct mandatory waypoints (`n`).
    pub fn num_waypoints(&self) -> usize {
        self.cities.len() - 2
    }

    /// Index of the end city (`n + 1`).
    pub fn end_index(&self) -> usize {
        self.cities.len() - 1
    }

    /// Total number of key points (`n + 2`).
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Always `false`: a key-point set holds at least start and end.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// City at key-point index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn city(&self, i: usize) -> &str {
        &self.cities[i]
    }

    /// All key-point cities in index order.
    pub fn cities(&self) -> &[String] {
        &self.cities
    }
}
