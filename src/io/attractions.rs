//! Attraction-to-city lookup: `attraction,city`.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{debug, warn};

use crate::error::Result;

/// Maps attraction names to the city that contains them.
///
/// # Examples
///
/// ```
/// use waypoint_routing::io::AttractionIndex;
///
/// let data = "Name,City\nLiberty Bell,Philadelphia PA\nHollywood Sign,Los Angeles CA\n";
/// let index = AttractionIndex::from_reader(data.as_bytes()).unwrap();
/// assert_eq!(index.get_city("Liberty Bell"), Some("Philadelphia PA"));
/// assert_eq!(index.get_city("Nowhere"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AttractionIndex {
    cities: HashMap<String, String>,
}

impl AttractionIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from `(attraction, city)` pairs. Later pairs win.
    pub fn from_pairs<I, A, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<String>,
        C: Into<String>,
    {
        let mut index = Self::new();
        for (attraction, city) in pairs {
            index.insert(attraction, city);
        }
        index
    }

    /// Reads `attraction,city` rows after a header row.
    ///
    /// Everything after the first comma is the city, so city names may
    /// contain commas. Both parts are trimmed; rows without a comma are
    /// ignored.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut index = Self::new();
        for record in rdr.records() {
            let record = record?;
            if record.len() < 2 {
                continue;
            }
            let city = record.iter().skip(1).collect::<Vec<_>>().join(",");
            index.insert(record[0].trim(), city.trim());
        }
        debug!("loaded {} attractions", index.len());
        Ok(index)
    }

    /// Opens `path` and reads it with [`from_reader`](Self::from_reader).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Adds or replaces an attraction.
    pub fn insert(&mut self, attraction: impl Into<String>, city: impl Into<String>) {
        self.cities.insert(attraction.into(), city.into());
    }

    /// The city containing `attraction`, if known.
    pub fn get_city(&self, attraction: &str) -> Option<&str> {
        self.cities.get(attraction).map(String::as_str)
    }

    /// Translates attraction names into distinct cities, in first-seen order.
    ///
    /// Unknown names are logged and skipped.
    pub fn resolve<I, S>(&self, attractions: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cities: Vec<String> = Vec::new();
        for name in attractions {
            let name = name.as_ref();
            match self.get_city(name) {
                Some(city) if !cities.iter().any(|c| c == city) => cities.push(city.to_string()),
                Some(_) => {}
                None => warn!("unknown attraction {name:?}, skipping"),
            }
        }
        cities
    }

    /// Number of attractions.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if no attractions are loaded.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_with_comma() {
        let data = "Name,City\nSpace Needle, Seattle, WA \n";
        let index = AttractionIndex::from_reader(data.as_bytes()).expect("valid");
        assert_eq!(index.get_city("Space Needle"), Some("Seattle, WA"));
    }

    #[test]
    fn test_rows_without_city_ignored() {
        let data = "Name,City\nLonely\nGrand Canyon,Flagstaff AZ\n";
        let index = AttractionIndex::from_reader(data.as_bytes()).expect("valid");
        assert_eq!(index.len(), 1);
        assert_eq!(index.get_city("Lonely"), None);
    }

    #[test]
    fn test_resolve_dedups_and_skips_unknown() {
        let index = AttractionIndex::from_pairs([
            ("Liberty Bell", "Philadelphia PA"),
            ("Independence Hall", "Philadelphia PA"),
            ("Hollywood Sign", "Los Angeles CA"),
        ]);
        let cities = index.resolve(["Liberty Bell", "Atlantis", "Hollywood Sign", "Independence Hall"]);
        assert_eq!(cities, vec!["Philadelphia PA", "Los Angeles CA"]);
    }

    #[test]
    fn test_empty_index() {
        let index = AttractionIndex::new();
        assert!(index.is_empty());
        assert!(index.resolve(["Anything"]).is_empty());
    }
}
