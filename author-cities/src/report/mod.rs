//! Sorting, logging and writing the author → cities report.
//!
//! Authors are ordered by descending number of cities, then by name. The log
//! line for an author lists its cities in the order they were first seen,
//! while the CSV cell lists them alphabetically. Both outputs keep their own
//! order.

use std::fs::{self, File};
use std::path::Path;

use crate::error::{ReportError, ReportResult};
use crate::logs::{LogEntry, LogSink};
use crate::models::{AuthorCities, AuthorRow};

/// Header row of `authors_and_cities.csv`.
pub const REPORT_HEADER: [&str; 3] = ["author", "num_cities", "cities"];

/// Joins city names in the log line and in the CSV cell.
pub const CITY_SEPARATOR: &str = ", ";

/// Authors with their cities, most cities first, ties by name.
pub fn sort_authors(author_cities: &AuthorCities) -> Vec<(&str, &[String])> {
    let mut sorted: Vec<(&str, &[String])> = author_cities.iter().collect();
    sorted.sort_by(|(a_name, a_cities), (b_name, b_cities)| {
        b_cities
            .len()
            .cmp(&a_cities.len())
            .then_with(|| a_name.cmp(b_name))
    });
    sorted
}

/// `<author> (<count>): <city1>, <city2>, ...` with cities in insertion order.
pub fn format_author_line(author: &str, cities: &[String]) -> String {
    format!("{} ({}): {}", author, cities.len(), cities.join(CITY_SEPARATOR))
}

/// Emit one log line per author, in the given order.
pub fn log_authors(sorted: &[(&str, &[String])], sink: &dyn LogSink) {
    for (author, cities) in sorted {
        sink.log(LogEntry::info(format_author_line(author, cities)));
    }
}

/// Report rows in the given author order, each cell's cities sorted alphabetically.
pub fn build_rows(sorted: &[(&str, &[String])]) -> Vec<AuthorRow> {
    sorted
        .iter()
        .map(|(author, cities)| {
            let mut alphabetical = cities.to_vec();
            alphabetical.sort();
            AuthorRow {
                author: author.to_string(),
                num_cities: alphabetical.len(),
                cities: alphabetical.join(CITY_SEPARATOR),
            }
        })
        .collect()
}

/// Write `rows` as CSV to `path`, creating parent directories as needed.
pub fn write_report<P: AsRef<Path>>(path: P, rows: &[AuthorRow]) -> ReportResult<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let file = File::create(path).map_err(|source| ReportError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;

    let write_err = |source: csv::Error| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Header is written explicitly so an empty report still has it.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(REPORT_HEADER).map_err(write_err)?;
    for row in rows {
        writer.serialize(row).map_err(write_err)?;
    }
    writer.flush().map_err(|e| write_err(e.into()))?;

    Ok(())
}
