//! Group corpus records by normalized author.
//!
//! ```text
//! author (normalized)       city     city2          Author → cities
//! ┌─────────────────────┬────────┬────────┐      ┌─────────────────────────────┐
//! │ John Smith, Erasmus │ Basel  │ Venice │  →   │ Smith, John: Basel, Venice, │
//! │ John Smith (?)      │ London │        │      │              London         │
//! └─────────────────────┴────────┴────────┘      │ Erasmus:     Basel, Venice  │
//!                                                └─────────────────────────────┘
//! ```

use super::normalize::{normalize_author, split_authors};
use crate::error::{CorpusError, CorpusResult};
use crate::models::{AuthorCities, Record};

/// Build the author → cities mapping for a set of corpus records.
///
/// Every author of a record is linked to each of its non-empty cities.
pub fn aggregate(records: &[Record]) -> AuthorCities {
    let mut author_cities = AuthorCities::new();

    for record in records {
        let authors: Vec<String> = split_authors(record.authors())
            .map(normalize_author)
            .collect();
        let cities = record.cities();

        for author in &authors {
            for city in cities {
                author_cities.add(author, city);
            }
        }
    }

    author_cities
}

/// Fail if `actual` differs from `expected`. `None` accepts any count.
pub fn check_author_count(actual: usize, expected: Option<usize>) -> CorpusResult<()> {
    match expected {
        Some(expected) if expected != actual => {
            Err(CorpusError::UnexpectedAuthorCount { expected, actual })
        }
        _ => Ok(()),
    }
}
