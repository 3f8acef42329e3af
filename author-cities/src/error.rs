//! Error types for the author → cities pipeline.
//!
//! One enum per stage, wrapped by a top-level [`PipelineError`]:
//!
//! - [`CsvError`] - loading and parsing the input CSV
//! - [`CorpusError`] - record/author count guards against dataset drift
//! - [`ReportError`] - writing the output report
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across stage boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Loading Errors
// =============================================================================

/// Errors while loading the input CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Unable to read input file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid CSV.
    #[error("Unable to parse file as CSV for {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// No header row.
    #[error("CSV file is empty")]
    EmptyFile,
}

// =============================================================================
// Corpus Guard Errors
// =============================================================================

/// The input no longer matches the dataset snapshot the counts were taken from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CorpusError {
    #[error("Unexpected number of filtered records: {actual} (expected {expected})")]
    UnexpectedRecordCount { expected: usize, actual: usize },

    #[error("Unexpected number of unique authors: {actual} (expected {expected})")]
    UnexpectedAuthorCount { expected: usize, actual: usize },
}

// =============================================================================
// Report Errors
// =============================================================================

/// Errors while writing the output report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to create the parent directory.
    #[error("Unable to create output directory for {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create the output file.
    #[error("Unable to create output file {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write or flush a row.
    #[error("Unable to write record to file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline error returned by [`crate::transform::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input loading error.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// Dataset drift detected.
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    /// Output writing error.
    #[error(transparent)]
    Report(#[from] ReportError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV loading.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for corpus guards.
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Result type for report writing.
pub type ReportResult<T> = Result<T, ReportError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
