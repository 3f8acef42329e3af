//! # Author cities - who printed where in the EiP title page study corpus
//!
//! Reads the EiP bibliographic dataset, keeps the title page study corpus,
//! normalizes author names and reports the cities each author is linked to.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   EiP.csv   │────▶│   Corpus    │────▶│  Normalize  │────▶│   Report    │
//! │  (records)  │     │  (filter)   │     │ (aggregate) │     │   (CSV)     │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - Paths and expected counts
//! - [`logs`] - Injectable log sink
//! - [`models`] - Records, author → cities mapping, report rows
//! - [`parser`] - CSV loading
//! - [`corpus`] - Title page study corpus filter
//! - [`transform`] - Name normalization, aggregation and pipeline
//! - [`report`] - Sorting and CSV output

// Core modules
pub mod config;
pub mod error;
pub mod logs;
pub mod models;

// Stages
pub mod corpus;
pub mod parser;
pub mod report;
pub mod transform;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::PipelineConfig;

pub use error::{CorpusError, CsvError, PipelineError, ReportError};

pub use logs::{LogEntry, LogLevel, LogSink, MemorySink, TracingSink};

pub use models::{AuthorCities, AuthorRow, Record};

pub use parser::{load_records, read_csv_file, records_from_rows};

pub use corpus::{filter_corpus, is_in_title_page_study_corpus};

pub use transform::{aggregate, normalize_author, run, run_records, PipelineOutcome};

pub use report::{build_rows, sort_authors, write_report};
