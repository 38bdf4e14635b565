//! Error types for the corpus loader.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for corpus loading.
///
/// These errors stay inside the loading layer: [`crate::loader::load_codes`]
/// degrades every failure to an absent source so lookups answer "no result"
/// instead of propagating I/O problems.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// File could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing failed.
    #[error("CSV parse error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File exceeds the size guard.
    #[error("File too large: {} is {size} bytes (limit {limit})", path.display())]
    TooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    /// File has no header row, so no columns can be detected.
    #[error("No header row found in {}", path.display())]
    EmptyTable { path: PathBuf },
}

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_large_display() {
        let err = CorpusError::TooLarge {
            path: PathBuf::from("cp.csv"),
            size: 999,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "File too large: cp.csv is 999 bytes (limit 10)"
        );
    }

    #[test]
    fn test_empty_table_display() {
        let err = CorpusError::EmptyTable {
            path: PathBuf::from("cpp.csv"),
        };
        assert!(err.to_string().contains("cpp.csv"));
    }
}
