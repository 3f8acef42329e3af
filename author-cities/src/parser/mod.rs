//! CSV loading for the EiP dataset.
//!
//! The whole file is read into memory and parsed as comma-delimited CSV with
//! standard quoting. Every row must have as many fields as the header.

use std::path::Path;
use tracing::{debug, warn};

use crate::error::{CsvError, CsvResult};
use crate::models::Record;

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode file bytes to text.
///
/// Valid UTF-8 is returned as is; anything else goes through detection and
/// falls back to Windows-1252, which maps every byte.
pub fn decode_content(bytes: &[u8]) -> String {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return text.to_string();
    }

    let charset = detect_encoding(bytes);
    if let Some(encoding) = encoding_rs::Encoding::for_label(charset.as_bytes()) {
        let (text, _, had_errors) = encoding.decode(bytes);
        if !had_errors {
            debug!(encoding = encoding.name(), "Decoded non UTF-8 input");
            return text.into_owned();
        }
    }

    warn!(detected = %charset, "Falling back to windows-1252 decoding");
    encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
}

/// Parse decoded CSV text into rows of fields. The header is not treated specially.
pub fn parse_rows(content: &str) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(content.as_bytes());

    reader
        .records()
        .map(|row| row.map(|r| r.iter().map(str::to_string).collect()))
        .collect()
}

/// Read and parse a CSV file. The first row returned is the header.
pub fn read_csv_file<P: AsRef<Path>>(path: P) -> CsvResult<Vec<Vec<String>>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| CsvError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = decode_content(&bytes);
    parse_rows(&content).map_err(|source| CsvError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Turn parsed rows into records keyed by the header row.
pub fn records_from_rows(rows: Vec<Vec<String>>) -> CsvResult<Vec<Record>> {
    let mut rows = rows.into_iter();
    let headers = rows.next().ok_or(CsvError::EmptyFile)?;

    Ok(rows.map(|row| Record::from_row(&headers, &row)).collect())
}

/// Load a CSV file straight into records.
pub fn load_records<P: AsRef<Path>>(path: P) -> CsvResult<Vec<Record>> {
    records_from_rows(read_csv_file(path)?)
}
