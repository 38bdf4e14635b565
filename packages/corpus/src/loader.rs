//! CSV ingestion of the two legal-code tables
//!
//! [`load_code`] reads one CSV file into an engine [`Dataset`]: the header
//! row becomes the column list (native order preserved), every record
//! becomes a row, and empty cells become absent cells. Ragged records are
//! tolerated — short rows just leave cells absent, surplus cells beyond
//! the header are dropped.
//!
//! [`load_codes`] loads both tables and degrades per source: a missing or
//! unreadable file is logged and becomes an absent dataset, so lookups
//! against it answer "no result" instead of failing the whole tool.
//!
//! # Example
//!
//! ```ignore
//! use vademecum_corpus::{load_codes, CorpusConfig};
//!
//! let codes = load_codes(&CorpusConfig::default());
//! let report = codes.search_article("155");
//! ```

use std::path::Path;

use vademecum_engine::{Dataset, LegalCodes, Row};

use crate::config::{CorpusConfig, MAX_CSV_SIZE};
use crate::error::{CorpusError, Result};

/// Load one code table from a CSV file.
///
/// # Returns
/// * `Ok(Dataset)` with the header columns and all records
/// * `Err(CorpusError)` when the file is missing, oversized, unparseable
///   or has no header row
pub fn load_code(path: &Path) -> Result<Dataset> {
    let metadata = std::fs::metadata(path).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() > MAX_CSV_SIZE {
        return Err(CorpusError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: MAX_CSV_SIZE,
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|source| CorpusError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let columns: Vec<String> = reader
        .headers()
        .map_err(|source| CorpusError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|header| header.trim().to_string())
        .collect();
    if columns.is_empty() || columns.iter().all(String::is_empty) {
        return Err(CorpusError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| CorpusError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let mut row = Row::new();
        for (i, cell) in record.iter().enumerate() {
            // Cells beyond the header are unnameable; empty cells are absent
            if cell.is_empty() {
                continue;
            }
            if let Some(column) = columns.get(i) {
                row.insert(column.clone(), cell.to_string());
            }
        }
        rows.push(row);
    }

    tracing::debug!(
        path = %path.display(),
        columns = columns.len(),
        rows = rows.len(),
        "Code table loaded"
    );

    Ok(Dataset::new(columns, rows))
}

/// Load both code tables, degrading per source.
///
/// Each failure is logged with `tracing::warn!` and becomes an absent
/// dataset; the returned [`LegalCodes`] always exists, possibly with one
/// or both sources missing.
pub fn load_codes(config: &CorpusConfig) -> LegalCodes {
    let penal = load_or_warn(&config.penal_path, "penal");
    let procedure = load_or_warn(&config.procedure_path, "procedure");
    LegalCodes::new(penal, procedure)
}

/// Load one source, turning any error into an absent dataset.
fn load_or_warn(path: &Path, source_name: &str) -> Option<Dataset> {
    match load_code(path) {
        Ok(dataset) => Some(dataset),
        Err(error) => {
            tracing::warn!(
                path = %path.display(),
                source = source_name,
                error = %error,
                "Could not load code table; lookups against it will return no results"
            );
            None
        }
    }
}
