//! Configuration constants and the corpus configuration type.

use std::path::PathBuf;

/// Default file name for the penal code table.
pub const DEFAULT_PENAL_PATH: &str = "cp.csv";

/// Default file name for the procedure code table.
pub const DEFAULT_PROCEDURE_PATH: &str = "cpp.csv";

/// Maximum CSV file size in bytes (10 MB).
///
/// Both code tables are small (tens of kilobytes); anything near this
/// limit is not a legal-code table and is rejected before parsing.
pub const MAX_CSV_SIZE: u64 = 10 * 1024 * 1024;

/// Where to find the two code tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Path to the penal code CSV
    pub penal_path: PathBuf,
    /// Path to the procedure code CSV
    pub procedure_path: PathBuf,
}

impl CorpusConfig {
    /// Create a configuration from explicit paths.
    pub fn new(penal_path: impl Into<PathBuf>, procedure_path: impl Into<PathBuf>) -> Self {
        Self {
            penal_path: penal_path.into(),
            procedure_path: procedure_path.into(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PENAL_PATH, DEFAULT_PROCEDURE_PATH)
    }
}
