//! Title page study corpus selection.
//!
//! A record belongs to the corpus when it predates 1701 (or has no usable
//! year), is not in Chinese, and carries a real title.

use crate::error::{CorpusError, CorpusResult};
use crate::models::Record;

/// Latest year kept in the corpus.
pub const MAX_YEAR: i64 = 1700;

/// Language excluded from the corpus, compared exactly.
pub const EXCLUDED_LANGUAGE: &str = "CHINESE";

/// Placeholder used in the dataset for an unknown title.
pub const UNKNOWN_TITLE: &str = "?";

/// Whether `record` is part of the title page study corpus.
///
/// A year that does not parse as an integer counts as in range.
pub fn is_in_title_page_study_corpus(record: &Record) -> bool {
    let year_in_range = match record.year().parse::<i64>() {
        Ok(year) => year <= MAX_YEAR,
        Err(_) => true,
    };
    let title = record.title();

    year_in_range
        && record.language() != EXCLUDED_LANGUAGE
        && !title.is_empty()
        && title != UNKNOWN_TITLE
}

/// Keep the corpus records, in input order.
pub fn filter_corpus(records: Vec<Record>) -> Vec<Record> {
    records
        .into_iter()
        .filter(is_in_title_page_study_corpus)
        .collect()
}

/// Fail if `actual` differs from `expected`. `None` accepts any count.
pub fn check_record_count(actual: usize, expected: Option<usize>) -> CorpusResult<()> {
    match expected {
        Some(expected) if expected != actual => {
            Err(CorpusError::UnexpectedRecordCount { expected, actual })
        }
        _ => Ok(()),
    }
}
