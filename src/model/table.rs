//! Table types.
//!
//! Tables are exposed per grid position: a cell spanning N grid columns
//! appears N times in its row, each copy carrying the same `grid_span`.
//! [`TableRow::from_compact`] builds such a row from one entry per cell.

use serde::{Deserialize, Serialize};

/// A table as exposed by the document model provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in document order
    pub rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Create a table from rows.
    pub fn with_rows(rows: Vec<TableRow>) -> Self {
        Self { rows }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of grid columns (the longest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check if any cell carries merge metadata.
    pub fn has_merged_cells(&self) -> bool {
        self.rows
            .iter()
            .flat_map(|r| &r.cells)
            .any(|c| c.vertical_merge.is_some() || c.span() > 1)
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells, one per grid position
    pub cells: Vec<RawCell>,
}

impl TableRow {
    /// Create a row from per-grid-position cells.
    pub fn new(cells: Vec<RawCell>) -> Self {
        Self { cells }
    }

    /// Create a row with one entry per cell, repeating each spanning cell
    /// across the grid positions it covers.
    pub fn from_compact(cells: Vec<RawCell>) -> Self {
        let mut expanded = Vec::with_capacity(cells.len());
        for cell in cells {
            for _ in 1..cell.span() {
                expanded.push(cell.clone());
            }
            expanded.push(cell);
        }
        Self { cells: expanded }
    }

    /// Create a row of plain cells from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(RawCell::text).collect())
    }
}

/// Vertical merge marker attached to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalMerge {
    /// The cell starts a vertical merge
    Restart,
    /// The cell continues a merge started above
    Continue,
}

/// A cell with its raw merge descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCell {
    /// Cell text; may contain newlines between inner paragraphs
    #[serde(default)]
    pub text: String,

    /// Vertical merge marker, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_merge: Option<VerticalMerge>,

    /// Declared number of grid columns, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_span: Option<u32>,
}

impl RawCell {
    /// Create a plain cell with text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            vertical_merge: None,
            grid_span: None,
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Mark the cell as the origin of a vertical merge.
    pub fn restart(mut self) -> Self {
        self.vertical_merge = Some(VerticalMerge::Restart);
        self
    }

    /// Mark the cell as continuing a vertical merge.
    pub fn continued(mut self) -> Self {
        self.vertical_merge = Some(VerticalMerge::Continue);
        self
    }

    /// Set the declared grid span.
    pub fn grid_span(mut self, span: u32) -> Self {
        self.grid_span = Some(span);
        self
    }

    /// Effective horizontal span; missing or zero spans count as 1.
    pub fn span(&self) -> u32 {
        self.grid_span.filter(|&s| s > 0).unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_column_count_uses_longest_row() {
        let table = Table::with_rows(vec![
            TableRow::from_strings(["a"]),
            TableRow::from_strings(["a", "b", "c"]),
            TableRow::from_strings(["a", "b"]),
        ]);
        assert_eq!(table.column_count(), 3);
    }

    #[test]
    fn test_from_compact_expands_spans() {
        let row = TableRow::from_compact(vec![
            RawCell::text("wide").grid_span(3),
            RawCell::text("narrow"),
        ]);
        assert_eq!(row.cells.len(), 4);
        assert_eq!(row.cells[0].text, "wide");
        assert_eq!(row.cells[2].text, "wide");
        assert_eq!(row.cells[3].text, "narrow");
    }

    #[test]
    fn test_span_defaults() {
        assert_eq!(RawCell::text("x").span(), 1);
        assert_eq!(RawCell::text("x").grid_span(0).span(), 1);
        assert_eq!(RawCell::text("x").grid_span(2).span(), 2);
    }

    #[test]
    fn test_merged_cells() {
        let mut table = Table::new();
        table.add_row(TableRow::new(vec![RawCell::text("A").restart()]));
        table.add_row(TableRow::new(vec![RawCell::empty().continued()]));
        assert!(table.has_merged_cells());

        let plain = Table::with_rows(vec![TableRow::from_strings(["a", "b"])]);
        assert!(!plain.has_merged_cells());
    }

    #[test]
    fn test_cell_serde_skips_missing_markers() {
        let json = serde_json::to_string(&RawCell::text("x")).unwrap();
        assert_eq!(json, r#"{"text":"x"}"#);

        let cell: RawCell =
            serde_json::from_str(r#"{"text":"y","vertical_merge":"continue","grid_span":2}"#)
                .unwrap();
        assert_eq!(cell.vertical_merge, Some(VerticalMerge::Continue));
        assert_eq!(cell.span(), 2);
    }
}
