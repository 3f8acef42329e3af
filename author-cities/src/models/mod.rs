//! Domain models for the author → cities pipeline.
//!
//! - [`Record`] - One EiP row keyed by column name
//! - [`AuthorCities`] - Normalized author → de-duplicated cities
//! - [`AuthorRow`] - One line of the output report

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Column Names
// =============================================================================

pub const YEAR_COLUMN: &str = "year";
pub const LANGUAGE_COLUMN: &str = "language";
pub const TITLE_COLUMN: &str = "title";
pub const AUTHOR_COLUMN: &str = "author (normalized)";
pub const CITY_COLUMN: &str = "city";
pub const CITY2_COLUMN: &str = "city2";

// =============================================================================
// Record
// =============================================================================

/// A data row keyed by the header row.
///
/// Unknown columns are kept but never read; absent columns read as `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Build a record from a header and one data row.
    ///
    /// A header that appears twice keeps the value of its last column.
    pub fn from_row(headers: &[String], row: &[String]) -> Self {
        let fields = headers
            .iter()
            .zip(row.iter())
            .map(|(h, v)| (h.clone(), v.clone()))
            .collect();
        Self { fields }
    }

    /// Field value, or `""` if the column is absent.
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn year(&self) -> &str {
        self.get(YEAR_COLUMN)
    }

    pub fn language(&self) -> &str {
        self.get(LANGUAGE_COLUMN)
    }

    pub fn title(&self) -> &str {
        self.get(TITLE_COLUMN)
    }

    pub fn authors(&self) -> &str {
        self.get(AUTHOR_COLUMN)
    }

    /// The two candidate cities, `city` then `city2`.
    pub fn cities(&self) -> [&str; 2] {
        [self.get(CITY_COLUMN), self.get(CITY2_COLUMN)]
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

// =============================================================================
// Author → Cities
// =============================================================================

/// Mapping from normalized author name to the cities linked to that author.
///
/// City lists keep insertion order and never hold the same city twice.
/// An author only gets an entry once a non-empty city is added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorCities {
    inner: HashMap<String, Vec<String>>,
}

impl AuthorCities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `city` to `author`. Empty cities and repeats are ignored.
    ///
    /// Returns `true` if the city was added.
    pub fn add(&mut self, author: &str, city: &str) -> bool {
        if city.is_empty() {
            return false;
        }
        match self.inner.get_mut(author) {
            Some(cities) if cities.iter().any(|c| c == city) => false,
            Some(cities) => {
                cities.push(city.to_string());
                true
            }
            None => {
                self.inner.insert(author.to_string(), vec![city.to_string()]);
                true
            }
        }
    }

    /// Cities for `author`, in insertion order.
    pub fn cities(&self, author: &str) -> Option<&[String]> {
        self.inner.get(author).map(Vec::as_slice)
    }

    /// Number of distinct authors.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Iterate in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.inner
            .iter()
            .map(|(author, cities)| (author.as_str(), cities.as_slice()))
    }
}

// =============================================================================
// Report Row
// =============================================================================

/// One row of `authors_and_cities.csv`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthorRow {
    pub author: String,
    pub num_cities: usize,
    /// Alphabetically sorted, joined with `", "`.
    pub cities: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_record_from_row() {
        let h = headers(&["year", "title", "city"]);
        let row = headers(&["1650", "Foo", "Paris"]);
        let record = Record::from_row(&h, &row);

        assert_eq!(record.year(), "1650");
        assert_eq!(record.title(), "Foo");
        assert_eq!(record.cities(), ["Paris", ""]);
    }

    #[test]
    fn test_missing_column_reads_empty() {
        let record: Record = [("year", "1650")].into_iter().collect();
        assert_eq!(record.language(), "");
        assert_eq!(record.authors(), "");
    }

    #[test]
    fn test_duplicate_header_keeps_last() {
        let h = headers(&["city", "city"]);
        let row = headers(&["Paris", "Lyon"]);
        assert_eq!(Record::from_row(&h, &row).get("city"), "Lyon");
    }

    #[test]
    fn test_author_cities_dedup() {
        let mut map = AuthorCities::new();
        assert!(map.add("Smith, John", "London"));
        assert!(!map.add("Smith, John", "London"));
        assert!(map.add("Smith, John", "Oxford"));

        assert_eq!(
            map.cities("Smith, John").unwrap(),
            &["London".to_string(), "Oxford".to_string()]
        );
    }

    #[test]
    fn test_empty_city_creates_no_author() {
        let mut map = AuthorCities::new();
        assert!(!map.add("Smith, John", ""));
        assert!(map.is_empty());
        assert!(map.cities("Smith, John").is_none());
    }

    #[test]
    fn test_city_match_is_exact() {
        let mut map = AuthorCities::new();
        map.add("Smith, John", "London");
        map.add("Smith, John", "london");
        map.add("Smith, John", "London ");
        assert_eq!(map.cities("Smith, John").unwrap().len(), 3);
    }
}
