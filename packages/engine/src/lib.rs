//! Vade Mecum Engine
//!
//! A Rust implementation of the Vade Mecum legal study engine.
//! This library provides functionality for:
//! - Tolerant statute lookup over tabular legal-code datasets
//! - Pretrial diversion (ANPP) eligibility screening with rationale text
//! - Simplified sentencing dosimetry with a generated narrative draft
//!
//! Everything here is educational and deliberately simplified; the engine
//! computes verdicts and display text, and the presentation layer decides
//! how to show them.
//!
//! # Example
//!
//! ```ignore
//! use vademecum_engine::{eligibility, sentencing, LegalCodes};
//! use vademecum_engine::{EligibilityFactors, FactorAssessment, SentencingRange};
//!
//! let codes = LegalCodes::new(Some(penal_code), Some(procedure_code));
//! let report = codes.search_article("155");
//!
//! let verdict = eligibility::evaluate(&EligibilityFactors::default());
//! let parecer = eligibility::opinion(&verdict);
//!
//! let range = SentencingRange::new(1.0, 4.0)?;
//! let base = sentencing::base_penalty(&range, &FactorAssessment::default());
//! ```

pub mod columns;
pub mod dataset;
pub mod eligibility;
pub mod error;
pub mod lookup;
pub mod sentencing;
pub mod service;
pub mod types;

// Re-export commonly used items
pub use columns::{ColumnResolver, ColumnRoles, MarkerResolver};
pub use dataset::{Dataset, Row};
pub use eligibility::{EligibilityFactors, EligibilityVerdict};
pub use error::{EngineError, Result};
pub use lookup::{Lookup, PASSAGE_SEPARATOR};
pub use sentencing::{
    apply_causes, base_penalty, explain, format_years, FactorAssessment, SentencingRange,
    YearsMonths,
};
pub use service::{ArticleSearchReport, LegalCodes, OffenseSearchReport, DIVERSION_ARTICLE};
pub use types::{AdjustmentCause, Assessment, CauseKind, JudicialFactor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
