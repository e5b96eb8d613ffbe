//! Export a table for hosts that persist edited expressions
//!
//! CSV goes through the `RowSource` seam so anything renderable is also
//! exportable; JSON is emitted from `TableData` directly so values keep
//! their types. Sparse cells export as empty fields (CSV) or omitted
//! keys (JSON).

use super::row_source::RowSource;
use super::table::{CellValue, TableData};
use anyhow::{anyhow, Result};
use chrono::Local;
use serde_json::Value;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Handles exporting table data to various formats
pub struct TableExporter;

impl TableExporter {
    /// Export any `RowSource` to a CSV file.
    ///
    /// Writes to `path` when given, otherwise to a timestamped file name
    /// in the working directory. Returns the path written.
    pub fn export_csv(source: &dyn RowSource, path: Option<&Path>) -> Result<PathBuf> {
        let row_count = source.row_count();
        if row_count == 0 {
            return Err(anyhow!("No data to export"));
        }

        let target = match path {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(Self::default_file_name("csv")),
        };

        let mut file = File::create(&target)?;

        let headers = source.column_names();
        writeln!(file, "{}", headers.join(","))?;

        for i in 0..row_count {
            if let Some(row) = source.row_as_strings(i) {
                let escaped: Vec<String> =
                    row.iter().map(|field| Self::escape_csv_field(field)).collect();
                writeln!(file, "{}", escaped.join(","))?;
            }
        }

        debug!("Exported {} rows to CSV file: {:?}", row_count, target);
        Ok(target)
    }

    /// Export a table to a JSON array of objects, keeping value types.
    ///
    /// Absent cells produce no key in their object, mirroring how sparse
    /// rows are stored.
    pub fn export_json(table: &TableData, path: Option<&Path>) -> Result<PathBuf> {
        if table.row_count() == 0 {
            return Err(anyhow!("No data to export"));
        }

        let target = match path {
            Some(p) => p.to_path_buf(),
            None => PathBuf::from(Self::default_file_name("json")),
        };

        let json_array = Self::table_to_json_values(table);

        let file = File::create(&target)?;
        serde_json::to_writer_pretty(file, &json_array)?;

        debug!(
            "Exported {} rows to JSON file: {:?}",
            table.row_count(),
            target
        );
        Ok(target)
    }

    /// Convert a table to JSON objects with typed values
    pub fn table_to_json_values(table: &TableData) -> Vec<Value> {
        let mut result = Vec::new();

        for row in &table.rows {
            let mut obj = serde_json::Map::new();
            for column in &table.columns {
                if let Some(value) = row.get(&column.accessor) {
                    obj.insert(column.accessor.clone(), Self::cell_to_json(value));
                }
            }
            result.push(Value::Object(obj));
        }

        result
    }

    fn cell_to_json(value: &CellValue) -> Value {
        match value {
            CellValue::String(s) => Value::String(s.clone()),
            CellValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            CellValue::Boolean(b) => Value::Bool(*b),
            CellValue::Date(d) => Value::String(d.clone()),
            CellValue::Time(t) => Value::String(t.clone()),
            CellValue::DateTime(dt) => Value::String(dt.clone()),
            CellValue::Null => Value::Null,
        }
    }

    /// Helper to escape CSV fields that contain special characters
    fn escape_csv_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn default_file_name(extension: &str) -> String {
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        format!("table_export_{}.{}", timestamp, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::table::{Column, DataType, Row};
    use std::fs;
    use tempfile::NamedTempFile;

    fn sample_table() -> TableData {
        let mut table = TableData::new("sample");
        table.add_column(Column::new("id").with_type(DataType::Number));
        table.add_column(Column::new("name").with_type(DataType::String));

        let mut first = Row::new();
        first.set("id", CellValue::Number(1.0));
        first.set("name", CellValue::String("Alice, the first".to_string()));
        table.add_row(first).unwrap();

        let mut second = Row::new();
        second.set("id", CellValue::Number(2.0));
        table.add_row(second).unwrap();

        table
    }

    #[test]
    fn test_export_csv_escapes_and_pads() -> Result<()> {
        let table = sample_table();
        let temp_file = NamedTempFile::new()?;

        let written = TableExporter::export_csv(&table, Some(temp_file.path()))?;
        let contents = fs::read_to_string(written)?;

        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "id,name");
        assert_eq!(lines[1], "1,\"Alice, the first\"");
        // Sparse cell exports as an empty field
        assert_eq!(lines[2], "2,");
        Ok(())
    }

    #[test]
    fn test_export_json_keeps_types_and_sparseness() -> Result<()> {
        let table = sample_table();
        let temp_file = NamedTempFile::new()?;

        let written = TableExporter::export_json(&table, Some(temp_file.path()))?;
        let contents = fs::read_to_string(written)?;
        let parsed: Vec<Value> = serde_json::from_str(&contents)?;

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["id"], Value::from(1.0));
        assert_eq!(parsed[0]["name"], Value::from("Alice, the first"));
        // The absent cell produces no key at all
        assert!(parsed[1].get("name").is_none());
        Ok(())
    }

    #[test]
    fn test_export_empty_table_fails() {
        let table = TableData::new("empty");

        assert!(TableExporter::export_csv(&table, None).is_err());
        assert!(TableExporter::export_json(&table, None).is_err());
    }
}
