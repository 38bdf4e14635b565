//! Tolerant statute lookup over a legal-code dataset
//!
//! Implements the search used by the consultation screens: given an article
//! identifier ("155", "28-A") or an offense label, find the matching rows
//! of a code table and return their text for display.
//!
//! The article search is deliberately tolerant. Queries and article cells
//! are compared after trimming and lowercasing, exact matches are preferred
//! over containment (so "28" never drags in "28-A"), and when the article
//! column gives nothing the query is retried as a substring of the statute
//! text itself. Every failure mode is an absent result: the caller decides
//! how to tell the operator that nothing was found.
//!
//! # Example
//!
//! ```ignore
//! use vademecum_engine::{Dataset, Lookup};
//!
//! let lookup = Lookup::new();
//! if let Some(texto) = lookup.article(Some(&penal_code), "155") {
//!     println!("{texto}");
//! }
//! ```

use crate::columns::{ColumnResolver, MarkerResolver};
use crate::dataset::Dataset;

/// Separator between matched passages in joined output.
pub const PASSAGE_SEPARATOR: &str = "\n\n---\n\n";

/// Statute lookup with an injectable column-role strategy.
pub struct Lookup {
    resolver: Box<dyn ColumnResolver>,
}

impl Default for Lookup {
    fn default() -> Self {
        Self::new()
    }
}

impl Lookup {
    /// Create a lookup using the default [`MarkerResolver`].
    pub fn new() -> Self {
        Self {
            resolver: Box::new(MarkerResolver),
        }
    }

    /// Create a lookup with a custom column-role resolver.
    pub fn with_resolver(resolver: Box<dyn ColumnResolver>) -> Self {
        Self { resolver }
    }

    /// Search a code table for an article identifier.
    ///
    /// Search order, first non-empty result wins:
    /// 1. equality against the article column (query and cells trimmed
    ///    and lowercased);
    /// 2. containment against the same column (query contained in cell);
    /// 3. containment against the free-text column.
    ///
    /// Matching rows keep dataset order. When a free-text column exists the
    /// result is the matching rows' text joined with
    /// [`PASSAGE_SEPARATOR`]; otherwise the full matching rows are rendered
    /// as a plain table.
    ///
    /// # Returns
    /// The matched text, or `None` when the dataset is absent, the query is
    /// blank, or nothing matched at any stage.
    pub fn article(&self, dataset: Option<&Dataset>, query: &str) -> Option<String> {
        let dataset = dataset?;
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        let roles = self.resolver.resolve(dataset.columns());

        // 1) Article column: equality first, then containment
        if let Some(article_col) = &roles.article {
            let mut matches = match_rows(dataset, article_col, |cell| {
                cell.trim().to_lowercase() == query
            });
            if matches.is_empty() {
                matches = match_rows(dataset, article_col, |cell| {
                    cell.trim().to_lowercase().contains(&query)
                });
            }

            if !matches.is_empty() {
                return Some(match &roles.text {
                    Some(text_col) => join_passages(dataset, &matches, text_col),
                    None => dataset.render_rows(&matches),
                });
            }
        }

        // 2) Fallback: containment in the statute text itself
        if let Some(text_col) = &roles.text {
            let matches = match_rows(dataset, text_col, |cell| {
                cell.to_lowercase().contains(&query)
            });
            if !matches.is_empty() {
                return Some(join_passages(dataset, &matches, text_col));
            }
        }

        tracing::debug!(query = %query, "No passage matched the query");
        None
    }

    /// Search a code table for an exact offense label.
    ///
    /// The label and the offense cells are compared after whitespace
    /// trimming only; there is no case fold on this path. Each matching row
    /// is rendered as a labelled block of all its column/value pairs,
    /// blocks joined with [`PASSAGE_SEPARATOR`].
    pub fn offense(&self, dataset: Option<&Dataset>, label: &str) -> Option<String> {
        let dataset = dataset?;
        let label = label.trim();
        if label.is_empty() {
            return None;
        }

        let offense_col = self.resolver.resolve(dataset.columns()).offense?;
        let matches = match_rows(dataset, &offense_col, |cell| cell.trim() == label);
        if matches.is_empty() {
            tracing::debug!(label = %label, "No offense row matched the label");
            return None;
        }
        Some(join_blocks(dataset, &matches))
    }

    /// Cross-reference an offense label against a secondary code table.
    ///
    /// Case-insensitive substring containment of the label inside the
    /// offense column or the free-text column (either matches). Rendering
    /// matches [`Lookup::offense`]: labelled blocks per row.
    pub fn offense_fallback(&self, dataset: Option<&Dataset>, label: &str) -> Option<String> {
        let dataset = dataset?;
        let needle = label.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let roles = self.resolver.resolve(dataset.columns());
        let candidates: Vec<&String> = [roles.offense.as_ref(), roles.text.as_ref()]
            .into_iter()
            .flatten()
            .collect();
        if candidates.is_empty() {
            return None;
        }

        let matches: Vec<usize> = (0..dataset.len())
            .filter(|&i| {
                candidates.iter().any(|col| {
                    dataset
                        .cell(i, col)
                        .is_some_and(|cell| cell.to_lowercase().contains(&needle))
                })
            })
            .collect();
        if matches.is_empty() {
            return None;
        }
        Some(join_blocks(dataset, &matches))
    }
}

impl std::fmt::Debug for Lookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lookup").finish_non_exhaustive()
    }
}

/// Indices of rows whose cell in `column` satisfies `predicate`.
///
/// Absent cells never match.
fn match_rows(dataset: &Dataset, column: &str, predicate: impl Fn(&str) -> bool) -> Vec<usize> {
    (0..dataset.len())
        .filter(|&i| dataset.cell(i, column).is_some_and(&predicate))
        .collect()
}

/// Join the matched rows' text cells with the passage separator.
///
/// A matching row with an absent text cell contributes an empty passage so
/// the row count stays visible in the output.
fn join_passages(dataset: &Dataset, indices: &[usize], text_col: &str) -> String {
    indices
        .iter()
        .map(|&i| dataset.cell(i, text_col).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(PASSAGE_SEPARATOR)
}

/// Join the matched rows' labelled blocks with the passage separator.
fn join_blocks(dataset: &Dataset, indices: &[usize]) -> String {
    indices
        .iter()
        .map(|&i| dataset.render_row_block(i))
        .collect::<Vec<_>>()
        .join(PASSAGE_SEPARATOR)
}
