//! Dual-source consultation service
//!
//! Holds the two legal-code tables (penal code and procedure code) as
//! explicitly passed immutable values and runs every search against both.
//! The two searches are always independent: a miss in one source never
//! suppresses the search in the other, and each side of a report is
//! rendered (or reported absent) on its own.
//!
//! # Example
//!
//! ```ignore
//! use vademecum_engine::LegalCodes;
//!
//! let codes = LegalCodes::new(Some(penal), Some(procedure));
//! let report = codes.search_article("155");
//! match report.penal {
//!     Some(texto) => println!("{texto}"),
//!     None => println!("Nada encontrado no Código Penal."),
//! }
//! ```

use serde::Serialize;

use crate::columns::ColumnResolver;
use crate::dataset::Dataset;
use crate::lookup::Lookup;

/// Article consulted by the diversion screening module (art. 28-A CPP).
pub const DIVERSION_ARTICLE: &str = "28-A";

/// Per-source result of an article search. `None` means "not found in
/// this source"; the caller translates absence into its own message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleSearchReport {
    /// Match from the penal code, if any
    pub penal: Option<String>,
    /// Match from the procedure code, if any
    pub procedure: Option<String>,
}

impl ArticleSearchReport {
    /// Whether at least one source produced a match.
    pub fn found_any(&self) -> bool {
        self.penal.is_some() || self.procedure.is_some()
    }
}

/// Per-source result of an offense search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OffenseSearchReport {
    /// Exact-label match from the penal code, if any
    pub penal: Option<String>,
    /// Cross-reference match from the procedure code, if any
    pub procedure: Option<String>,
}

impl OffenseSearchReport {
    /// Whether at least one source produced a match.
    pub fn found_any(&self) -> bool {
        self.penal.is_some() || self.procedure.is_some()
    }
}

/// The two code tables plus the lookup strategy used to search them.
///
/// Either source may be absent (its file was missing or unreadable);
/// searches against an absent source simply report no result.
pub struct LegalCodes {
    penal: Option<Dataset>,
    procedure: Option<Dataset>,
    lookup: Lookup,
}

impl LegalCodes {
    /// Create a service over the two sources with the default lookup.
    pub fn new(penal: Option<Dataset>, procedure: Option<Dataset>) -> Self {
        Self {
            penal,
            procedure,
            lookup: Lookup::new(),
        }
    }

    /// Create a service with a custom column-role resolver.
    pub fn with_resolver(
        penal: Option<Dataset>,
        procedure: Option<Dataset>,
        resolver: Box<dyn ColumnResolver>,
    ) -> Self {
        Self {
            penal,
            procedure,
            lookup: Lookup::with_resolver(resolver),
        }
    }

    /// The penal code table, if loaded.
    pub fn penal(&self) -> Option<&Dataset> {
        self.penal.as_ref()
    }

    /// The procedure code table, if loaded.
    pub fn procedure(&self) -> Option<&Dataset> {
        self.procedure.as_ref()
    }

    /// Search both codes for an article identifier.
    pub fn search_article(&self, query: &str) -> ArticleSearchReport {
        tracing::debug!(query = %query, "Searching both codes for article");
        ArticleSearchReport {
            penal: self.lookup.article(self.penal.as_ref(), query),
            procedure: self.lookup.article(self.procedure.as_ref(), query),
        }
    }

    /// Search both codes for an offense label.
    ///
    /// The penal code is matched by exact label; the procedure code is
    /// cross-referenced by case-insensitive containment in its offense or
    /// text column.
    pub fn search_offense(&self, label: &str) -> OffenseSearchReport {
        tracing::debug!(label = %label, "Searching both codes for offense");
        OffenseSearchReport {
            penal: self.lookup.offense(self.penal.as_ref(), label),
            procedure: self.lookup.offense_fallback(self.procedure.as_ref(), label),
        }
    }

    /// Statute text shown above the diversion checklist (art. 28-A CPP).
    pub fn diversion_article_text(&self) -> Option<String> {
        self.lookup.article(self.procedure.as_ref(), DIVERSION_ARTICLE)
    }
}

impl std::fmt::Debug for LegalCodes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegalCodes")
            .field("penal_rows", &self.penal.as_ref().map(Dataset::len))
            .field("procedure_rows", &self.procedure.as_ref().map(Dataset::len))
            .finish_non_exhaustive()
    }
}
