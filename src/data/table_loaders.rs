//! File and in-memory loaders producing `TableData`
//!
//! CSV headers and JSON object keys become columns; column types are
//! inferred from a bounded sample of the values. Empty CSV fields and
//! JSON nulls produce no row key at all, keeping loaded rows sparse.

use super::table::{CellValue, Column, Row, TableData};
use super::type_inference::TypeInference;
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde_json::Value as JsonValue;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Rows sampled per column when inferring types
const TYPE_SAMPLE_ROWS: usize = 100;

/// Load a CSV file into a `TableData`
pub fn load_csv_to_table<P: AsRef<Path>>(path: P, table_name: &str) -> Result<TableData> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open CSV file: {:?}", path.as_ref()))?;

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers = reader.headers()?.clone();
    let mut table = TableData::new(table_name);

    table
        .metadata
        .insert("source_type".to_string(), "csv".to_string());
    table.metadata.insert(
        "source_path".to_string(),
        path.as_ref().display().to_string(),
    );

    for header in headers.iter() {
        table.add_column(Column::new(header));
    }

    // Read everything as strings first so types can be sampled
    let mut string_rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let row: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        string_rows.push(row);
    }

    infer_column_types(&mut table, &string_rows);
    append_string_rows(&mut table, string_rows)?;

    debug!(
        "Loaded CSV '{}': {} columns, {} rows",
        table.name,
        table.column_count(),
        table.row_count()
    );
    Ok(table)
}

/// Load a JSON file (an array of objects) into a `TableData`
///
/// The keys of the first object define the columns; later objects may
/// omit any of them.
pub fn load_json_to_table<P: AsRef<Path>>(path: P, table_name: &str) -> Result<TableData> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open JSON file: {:?}", path.as_ref()))?;
    let reader = BufReader::new(file);

    let json_data: Vec<JsonValue> =
        serde_json::from_reader(reader).with_context(|| "Failed to parse JSON file")?;

    let mut table = build_table_from_records(&json_data, table_name, false)?;

    table
        .metadata
        .insert("source_type".to_string(), "json".to_string());
    table.metadata.insert(
        "source_path".to_string(),
        path.as_ref().display().to_string(),
    );

    debug!(
        "Loaded JSON '{}': {} columns, {} rows",
        table.name,
        table.column_count(),
        table.row_count()
    );
    Ok(table)
}

/// Load already-parsed JSON records into a `TableData`
///
/// Columns are the union of every record's keys, in encounter order, so
/// no value is dropped for being absent from the first record.
pub fn load_json_records(records: Vec<JsonValue>, table_name: &str) -> Result<TableData> {
    let mut table = build_table_from_records(&records, table_name, true)?;

    table
        .metadata
        .insert("source_type".to_string(), "json_records".to_string());

    Ok(table)
}

fn build_table_from_records(
    records: &[JsonValue],
    table_name: &str,
    union_keys: bool,
) -> Result<TableData> {
    let mut table = TableData::new(table_name);

    if records.is_empty() {
        return Ok(table);
    }

    let column_names = if union_keys {
        let mut names: Vec<String> = Vec::new();
        for record in records {
            if let Some(obj) = record.as_object() {
                for key in obj.keys() {
                    if !names.iter().any(|n| n == key) {
                        names.push(key.clone());
                    }
                }
            }
        }
        names
    } else {
        let first_obj = records[0]
            .as_object()
            .context("JSON data must be an array of objects")?;
        first_obj.keys().cloned().collect()
    };

    for name in &column_names {
        table.add_column(Column::new(name));
    }

    // Stringify in column order; nulls and absent keys become empty
    let mut string_rows = Vec::new();
    for record in records {
        if let Some(obj) = record.as_object() {
            let row: Vec<String> = column_names
                .iter()
                .map(|name| match obj.get(name) {
                    Some(JsonValue::Null) | None => String::new(),
                    Some(JsonValue::Bool(b)) => b.to_string(),
                    Some(JsonValue::Number(n)) => n.to_string(),
                    Some(JsonValue::String(s)) => s.clone(),
                    Some(other) => other.to_string(),
                })
                .collect();
            string_rows.push(row);
        }
    }

    infer_column_types(&mut table, &string_rows);
    append_string_rows(&mut table, string_rows)?;

    Ok(table)
}

/// Assign each column the most specific type fitting a sample of its values
fn infer_column_types(table: &mut TableData, string_rows: &[Vec<String>]) {
    let sample_size = string_rows.len().min(TYPE_SAMPLE_ROWS);

    for (col_idx, column) in table.columns.iter_mut().enumerate() {
        let samples = string_rows
            .iter()
            .take(sample_size)
            .filter_map(|row| row.get(col_idx))
            .map(|s| s.as_str());
        column.data_type = TypeInference::infer_from_samples(samples);
    }
}

/// Convert stringified rows to typed sparse rows and append them
fn append_string_rows(table: &mut TableData, string_rows: Vec<Vec<String>>) -> Result<()> {
    let columns: Vec<(String, super::table::DataType)> = table
        .columns
        .iter()
        .map(|c| (c.accessor.clone(), c.data_type.clone()))
        .collect();

    for string_row in string_rows {
        let mut row = Row::new();
        for (col_idx, value) in string_row.iter().enumerate() {
            // Empty cells stay absent rather than holding a null
            if value.is_empty() {
                continue;
            }
            let (accessor, data_type) = &columns[col_idx];
            row.set(accessor.clone(), CellValue::from_string(value, data_type));
        }
        table.add_row(row).map_err(|e| anyhow::anyhow!(e))?;
    }

    Ok(())
}
