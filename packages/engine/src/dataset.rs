//! Read-only tabular dataset abstraction
//!
//! A [`Dataset`] is the in-memory form of one legal-code table (penal code
//! or procedure code): named columns in insertion order and rows mapping
//! column names to cell text. Datasets are built once, by a loader or by
//! tests, and never mutated afterwards. Cells may be absent; an absent cell
//! is simply a missing key in the row map.

use std::collections::HashMap;

/// A single row: column name to cell text. Absent cells have no entry.
pub type Row = HashMap<String, String>;

/// An immutable, ordered table of legal-code rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// Column names, insertion order preserved
    columns: Vec<String>,
    /// Rows in source order
    rows: Vec<Row>,
}

impl Dataset {
    /// Create a dataset from column names and rows.
    ///
    /// Row keys that do not appear in `columns` are kept but unreachable
    /// through ordered accessors; loaders are expected to only emit cells
    /// for known columns.
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Column names in native order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All rows in source order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text at `row`/`column`, or `None` when the cell is absent.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }

    /// Render the selected rows as a plain column-aligned table.
    ///
    /// Used as the lookup fallback when a dataset has no recognizable
    /// free-text column: the caller still gets something readable. The
    /// header line lists every column; absent cells render blank.
    pub fn render_rows(&self, indices: &[usize]) -> String {
        // Column width: widest of header and selected cells
        let widths: Vec<usize> = self
            .columns
            .iter()
            .map(|col| {
                indices
                    .iter()
                    .filter_map(|&i| self.cell(i, col))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(col.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut lines = Vec::with_capacity(indices.len() + 1);
        lines.push(render_line(
            self.columns.iter().map(String::as_str),
            &widths,
        ));
        for &i in indices {
            lines.push(render_line(
                self.columns.iter().map(|col| self.cell(i, col).unwrap_or("")),
                &widths,
            ));
        }
        lines.join("\n")
    }

    /// Render one row as a labelled block: `column: value` per line, in
    /// column order, skipping absent cells.
    pub fn render_row_block(&self, index: usize) -> String {
        self.columns
            .iter()
            .filter_map(|col| {
                self.cell(index, col)
                    .map(|value| format!("{col}: {value}"))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Pad each cell to its column width and join with two spaces.
fn render_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
