//! High-level pipeline: EiP CSV → title page study corpus → author report.
//!
//! # Example
//!
//! ```rust,ignore
//! use author_cities::{run, PipelineConfig, TracingSink};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = run(&PipelineConfig::default(), &TracingSink)?;
//!     println!("Wrote {} authors", result.rows.len());
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use tracing::debug;

use super::aggregate::{aggregate, check_author_count};
use crate::config::PipelineConfig;
use crate::corpus::{check_record_count, filter_corpus};
use crate::error::PipelineResult;
use crate::logs::{LogEntry, LogSink};
use crate::models::{AuthorRow, Record};
use crate::parser::load_records;
use crate::report::{build_rows, log_authors, sort_authors, write_report};

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Records kept in the title page study corpus.
    pub record_count: usize,

    /// Report rows, in the order they were written.
    pub rows: Vec<AuthorRow>,

    /// Where the report was written.
    pub output_path: PathBuf,
}

/// Run the whole pipeline from the configured input file.
///
/// 1. Load the CSV
/// 2. Keep the title page study corpus and check its size
/// 3. Aggregate cities per normalized author and check the author count
/// 4. Log every author and write the report
///
/// Nothing is written if a count check fails.
pub fn run(config: &PipelineConfig, sink: &dyn LogSink) -> PipelineResult<PipelineOutcome> {
    let records = load_records(&config.input_path)?;
    debug!(
        path = %config.input_path.display(),
        rows = records.len(),
        "Loaded input CSV"
    );
    run_records(records, config, sink)
}

/// Run the pipeline on records that are already loaded.
pub fn run_records(
    records: Vec<Record>,
    config: &PipelineConfig,
    sink: &dyn LogSink,
) -> PipelineResult<PipelineOutcome> {
    let corpus = filter_corpus(records);
    debug!(records = corpus.len(), "Filtered title page study corpus");
    check_record_count(corpus.len(), config.expected_records)?;

    let author_cities = aggregate(&corpus);
    debug!(authors = author_cities.len(), "Aggregated cities by author");
    check_author_count(author_cities.len(), config.expected_authors)?;

    let sorted = sort_authors(&author_cities);
    log_authors(&sorted, sink);

    let rows = build_rows(&sorted);
    write_report(&config.output_path, &rows)?;

    sink.log(LogEntry::success(format!(
        "Wrote {} authors and their cities to {}",
        rows.len(),
        config.output_path.display()
    )));

    Ok(PipelineOutcome {
        record_count: corpus.len(),
        rows,
        output_path: config.output_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CorpusError, PipelineError};
    use crate::logs::MemorySink;

    fn record(year: &str, title: &str, authors: &str, city: &str, city2: &str) -> Record {
        [
            ("year", year),
            ("language", "LATIN"),
            ("title", title),
            ("author (normalized)", authors),
            ("city", city),
            ("city2", city2),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_run_records_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = PipelineConfig::default()
            .with_output(dir.path().join("out/authors_and_cities.csv"))
            .with_expected_records(Some(2))
            .with_expected_authors(Some(2));
        let records = vec![
            record("1600", "A", "John Smith, Jean de la Fontaine", "London", "Paris"),
            record("1620", "B", "John Smith", "Oxford", ""),
            record("1800", "C", "Late Author", "Berlin", ""),
        ];
        let sink = MemorySink::new();

        let outcome = run_records(records, &config, &sink).unwrap();

        assert_eq!(outcome.record_count, 2);
        assert_eq!(outcome.rows[0].author, "Smith, John");
        assert_eq!(outcome.rows[0].cities, "London, Oxford, Paris");
        assert!(outcome.output_path.exists());

        let messages = sink.messages();
        assert_eq!(messages[0], "Smith, John (3): London, Paris, Oxford");
        assert_eq!(messages[1], "de la Fontaine, Jean (2): London, Paris");
        assert!(messages[2].starts_with("Wrote 2 authors and their cities to "));
    }

    #[test]
    fn test_record_guard_blocks_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out/report.csv");
        let config = PipelineConfig::default().with_output(&output);
        let sink = MemorySink::new();

        let err = run_records(vec![record("1600", "A", "John Smith", "London", "")], &config, &sink)
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Corpus(CorpusError::UnexpectedRecordCount { actual: 1, .. })
        ));
        assert!(!output.exists());
        assert!(!dir.path().join("out").exists());
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_author_guard_blocks_output() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("report.csv");
        let config = PipelineConfig::default()
            .with_output(&output)
            .with_expected_records(None);
        let sink = MemorySink::new();

        let err = run_records(vec![record("1600", "A", "John Smith", "London", "")], &config, &sink)
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Corpus(CorpusError::UnexpectedAuthorCount {
                expected: 97,
                actual: 1
            })
        ));
        assert!(!output.exists());
    }
}
