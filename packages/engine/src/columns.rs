//! Heuristic column-role detection
//!
//! Legal-code tables arrive with no fixed schema; only naming conventions
//! identify which column holds the article number, the statute text or the
//! offense label. Detection matches marker substrings against column names,
//! case-insensitively, taking the first matching column in native order.
//!
//! This is best-effort by design: a table whose column names carry none of
//! the markers yields no usable roles, and lookups against it degrade to
//! "no result" rather than failing. The [`ColumnResolver`] trait makes the
//! strategy injectable so alternative schemas can be supported without
//! touching the lookup logic.

use serde::Serialize;

/// Marker substrings identifying the article-number column.
pub const ARTICLE_MARKERS: [&str; 1] = ["art"];

/// Marker substrings identifying the free-text column.
pub const TEXT_MARKERS: [&str; 4] = ["texto", "descr", "ementa", "conteudo"];

/// Marker substrings identifying the offense/category column.
pub const OFFENSE_MARKERS: [&str; 3] = ["crime", "tipo", "descricao"];

/// Detected column roles for one dataset. Every role is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ColumnRoles {
    /// Column holding article numbers ("Artigo", "art.", ...)
    pub article: Option<String>,
    /// Column holding statute text ("Texto", "Descrição", "Ementa", ...)
    pub text: Option<String>,
    /// Column holding the offense/category label ("Crime", "Tipo", ...)
    pub offense: Option<String>,
}

/// Strategy for classifying a dataset's columns into roles.
///
/// Implementations must be pure: the same column list always resolves to
/// the same roles. Roles are recomputed per call; callers may memoize.
pub trait ColumnResolver: Send + Sync {
    /// Classify `columns` (in dataset-native order) into roles.
    fn resolve(&self, columns: &[String]) -> ColumnRoles;
}

/// Default resolver: fixed marker-substring sets per role.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkerResolver;

impl MarkerResolver {
    /// First column whose lowercased name contains any marker.
    fn first_match(columns: &[String], markers: &[&str]) -> Option<String> {
        columns
            .iter()
            .find(|col| {
                let lower = col.to_lowercase();
                markers.iter().any(|marker| lower.contains(marker))
            })
            .cloned()
    }
}

impl ColumnResolver for MarkerResolver {
    fn resolve(&self, columns: &[String]) -> ColumnRoles {
        ColumnRoles {
            article: Self::first_match(columns, &ARTICLE_MARKERS),
            text: Self::first_match(columns, &TEXT_MARKERS),
            offense: Self::first_match(columns, &OFFENSE_MARKERS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_detects_all_roles() {
        let roles = MarkerResolver.resolve(&cols(&["Artigo", "Texto", "Crime"]));
        assert_eq!(roles.article.as_deref(), Some("Artigo"));
        assert_eq!(roles.text.as_deref(), Some("Texto"));
        assert_eq!(roles.offense.as_deref(), Some("Crime"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let roles = MarkerResolver.resolve(&cols(&["ARTIGO", "EMENTA"]));
        assert_eq!(roles.article.as_deref(), Some("ARTIGO"));
        assert_eq!(roles.text.as_deref(), Some("EMENTA"));
    }

    #[test]
    fn test_first_match_in_native_order_wins() {
        // Both "descricao_curta" and "texto_integral" carry text markers;
        // the earlier column wins.
        let roles = MarkerResolver.resolve(&cols(&["descricao_curta", "texto_integral"]));
        assert_eq!(roles.text.as_deref(), Some("descricao_curta"));
    }

    #[test]
    fn test_one_column_can_fill_several_roles() {
        // "descricao" carries both a text marker ("descr") and an offense
        // marker; detection per role is independent.
        let roles = MarkerResolver.resolve(&cols(&["descricao"]));
        assert_eq!(roles.text.as_deref(), Some("descricao"));
        assert_eq!(roles.offense.as_deref(), Some("descricao"));
        assert_eq!(roles.article, None);
    }

    #[test]
    fn test_no_markers_yields_no_roles() {
        let roles = MarkerResolver.resolve(&cols(&["id", "valor"]));
        assert_eq!(roles, ColumnRoles::default());
    }

    #[test]
    fn test_empty_column_list() {
        let roles = MarkerResolver.resolve(&[]);
        assert_eq!(roles, ColumnRoles::default());
    }
}
