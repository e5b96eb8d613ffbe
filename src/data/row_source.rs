//! Read-only seam between the data model and a rendering surface
//!
//! A host grid renders whatever a `RowSource` reports. The implicit "#"
//! ordinal column is the renderer's own artifact; sources never report
//! it and no implementation stores one.

use super::table::TableData;
use std::fmt::Debug;

/// Core trait for read-only, stringified data access
pub trait RowSource: Debug {
    /// Get a single row as display strings, in column order.
    /// Returns None if the index is out of bounds.
    fn row_as_strings(&self, index: usize) -> Option<Vec<String>>;

    /// Get the column header names
    fn column_names(&self) -> Vec<String>;

    /// Get the total number of rows
    fn row_count(&self) -> usize;

    /// Get the total number of columns
    fn column_count(&self) -> usize;

    /// Get a slice of rows for efficient rendering
    /// This is an optimization to avoid repeated row_as_strings calls
    fn visible_rows(&self, start: usize, count: usize) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        let end = (start + count).min(self.row_count());

        for i in start..end {
            if let Some(row) = self.row_as_strings(i) {
                rows.push(row);
            }
        }

        rows
    }

    /// Get a single cell as a display string
    fn cell_value(&self, row: usize, col: usize) -> Option<String> {
        self.row_as_strings(row).and_then(|r| r.get(col).cloned())
    }

    /// Display width per column, sampled from the first 100 rows
    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];
        let sample_size = 100.min(self.row_count());

        // Start with header widths
        for (i, name) in self.column_names().iter().enumerate() {
            if i < widths.len() {
                widths[i] = name.len();
            }
        }

        for row_idx in 0..sample_size {
            if let Some(row) = self.row_as_strings(row_idx) {
                for (col_idx, value) in row.iter().enumerate() {
                    if col_idx < widths.len() {
                        widths[col_idx] = widths[col_idx].max(value.len());
                    }
                }
            }
        }

        widths
    }
}

impl RowSource for TableData {
    fn row_as_strings(&self, index: usize) -> Option<Vec<String>> {
        let row = self.rows.get(index)?;
        Some(
            self.columns
                .iter()
                .map(|c| {
                    row.get(&c.accessor)
                        .map(|v| v.to_string())
                        .unwrap_or_default()
                })
                .collect(),
        )
    }

    fn column_names(&self) -> Vec<String> {
        self.column_labels()
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::{CellValue, Column, Row};

    fn sample_table() -> TableData {
        let mut table = TableData::new("sample");
        table.add_column(Column::new("id"));
        table.add_column(Column::new("name"));

        for (id, name) in [(1.0, "Alice"), (2.0, "Bob")] {
            let mut row = Row::new();
            row.set("id", CellValue::Number(id));
            row.set("name", CellValue::String(name.to_string()));
            table.add_row(row).unwrap();
        }
        table
    }

    #[test]
    fn test_table_as_row_source() {
        let table = sample_table();

        assert_eq!(table.row_count(), 2);
        assert_eq!(RowSource::column_count(&table), 2);
        assert_eq!(RowSource::column_names(&table), vec!["id", "name"]);
        assert_eq!(
            table.row_as_strings(0),
            Some(vec!["1".to_string(), "Alice".to_string()])
        );
        assert_eq!(table.cell_value(1, 1), Some("Bob".to_string()));
        assert!(table.row_as_strings(5).is_none());
    }

    #[test]
    fn test_sparse_cells_render_empty() {
        let mut table = TableData::new("sparse");
        table.add_column(Column::new("a"));
        table.add_column(Column::new("b"));
        let mut row = Row::new();
        row.set("b", CellValue::String("filled".to_string()));
        table.add_row(row).unwrap();

        assert_eq!(
            table.row_as_strings(0),
            Some(vec![String::new(), "filled".to_string()])
        );
    }

    #[test]
    fn test_visible_rows_window() {
        let mut table = TableData::new("many");
        table.add_column(Column::new("n"));
        for i in 0..10 {
            let mut row = Row::new();
            row.set("n", CellValue::Number(i as f64));
            table.add_row(row).unwrap();
        }

        let visible = table.visible_rows(2, 3);
        assert_eq!(visible.len(), 3);
        assert_eq!(visible[0], vec!["2"]);
        assert_eq!(visible[2], vec!["4"]);
    }

    #[test]
    fn test_column_widths() {
        let table = sample_table();

        let widths = table.column_widths();
        assert_eq!(widths[0], 2); // header "id"
        assert_eq!(widths[1], 5); // "Alice"
    }
}
