//! Pipeline configuration.
//!
//! The binary always runs with [`PipelineConfig::default`], which points at the
//! EiP snapshot the expected counts were taken from.

use std::path::PathBuf;

/// Input dataset, relative to the working directory.
pub const CSV_PATH: &str = "public/docs/EiP.csv";

/// Report destination, relative to the working directory.
pub const OUTPUT_CSV_PATH: &str = "./out/authors_and_cities.csv";

/// Records in the title page study corpus of the current snapshot.
pub const EXPECTED_NUM_OF_RECORDS: usize = 218;

/// Distinct normalized authors in the title page study corpus.
pub const EXPECTED_NUM_OF_UNIQUE_AUTHORS: usize = 97;

/// Where to read, where to write, and which counts to enforce.
///
/// `None` for an expected count disables that guard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub expected_records: Option<usize>,
    pub expected_authors: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(CSV_PATH),
            output_path: PathBuf::from(OUTPUT_CSV_PATH),
            expected_records: Some(EXPECTED_NUM_OF_RECORDS),
            expected_authors: Some(EXPECTED_NUM_OF_UNIQUE_AUTHORS),
        }
    }
}

impl PipelineConfig {
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_expected_records(mut self, expected: Option<usize>) -> Self {
        self.expected_records = expected;
        self
    }

    pub fn with_expected_authors(mut self, expected: Option<usize>) -> Self {
        self.expected_authors = expected;
        self
    }

    /// Same paths, no count guards.
    pub fn unchecked(self) -> Self {
        self.with_expected_records(None).with_expected_authors(None)
    }
}
