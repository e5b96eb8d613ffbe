//! Core tabular model for boxed expressions
//!
//! Columns are the single source of truth for which keys a row may
//! carry; rows are sparse mappings from column accessor to cell value.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Semantic type tag carried by a column header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    Undefined,
    Boolean,
    Context,
    Date,
    DateTime,
    DaysAndTimeDuration,
    Number,
    String,
    Time,
    YearsAndMonthsDuration,
}

impl DataType {
    /// Merge two types when values of both appear in one column
    pub fn merge(&self, other: &DataType) -> DataType {
        if self == other {
            return self.clone();
        }

        match (self, other) {
            (DataType::Undefined, t) | (t, DataType::Undefined) => t.clone(),
            // A date column that also holds timestamps is still temporal
            (DataType::Date, DataType::DateTime) | (DataType::DateTime, DataType::Date) => {
                DataType::DateTime
            }
            _ => DataType::String,
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DataType::Undefined => "<Undefined>",
            DataType::Boolean => "boolean",
            DataType::Context => "context",
            DataType::Date => "date",
            DataType::DateTime => "date and time",
            DataType::DaysAndTimeDuration => "days and time duration",
            DataType::Number => "number",
            DataType::String => "string",
            DataType::Time => "time",
            DataType::YearsAndMonthsDuration => "years and months duration",
        };
        write!(f, "{}", label)
    }
}

/// Column header definition
///
/// `accessor` is the unique key rows are indexed by; `label` is what the
/// header cell displays. A rename keeps them identical, but loaders may
/// produce tables where they differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub accessor: String,
    pub label: String,
    pub data_type: DataType,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            accessor: name.clone(),
            label: name,
            data_type: DataType::Undefined,
        }
    }

    pub fn with_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A single cell value
///
/// Context and duration values have no structured representation here;
/// they are carried verbatim as strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Date(String),
    Time(String),
    DateTime(String),
    Null,
}

impl CellValue {
    /// Parse a raw string under the expectations of a column type
    pub fn from_string(s: &str, data_type: &DataType) -> Self {
        if s.is_empty() || s.eq_ignore_ascii_case("null") {
            return CellValue::Null;
        }

        match data_type {
            DataType::Number => s
                .parse::<f64>()
                .map(CellValue::Number)
                .unwrap_or_else(|_| CellValue::String(s.to_string())),
            DataType::Boolean => {
                let lower = s.to_lowercase();
                CellValue::Boolean(lower == "true" || lower == "1" || lower == "yes")
            }
            DataType::Date => CellValue::Date(s.to_string()),
            DataType::Time => CellValue::Time(s.to_string()),
            DataType::DateTime => CellValue::DateTime(s.to_string()),
            _ => CellValue::String(s.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    pub fn data_type(&self) -> DataType {
        match self {
            CellValue::String(_) => DataType::String,
            CellValue::Number(_) => DataType::Number,
            CellValue::Boolean(_) => DataType::Boolean,
            CellValue::Date(_) => DataType::Date,
            CellValue::Time(_) => DataType::Time,
            CellValue::DateTime(_) => DataType::DateTime,
            CellValue::Null => DataType::Undefined,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Boolean(b) => write!(f, "{}", b),
            CellValue::Date(d) => write!(f, "{}", d),
            CellValue::Time(t) => write!(f, "{}", t),
            CellValue::DateTime(dt) => write!(f, "{}", dt),
            CellValue::Null => write!(f, ""),
        }
    }
}

/// A sparse row: absence of a key means "no value in that column"
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Row {
    cells: HashMap<String, CellValue>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, accessor: &str) -> Option<&CellValue> {
        self.cells.get(accessor)
    }

    pub fn set(&mut self, accessor: impl Into<String>, value: CellValue) {
        self.cells.insert(accessor.into(), value);
    }

    pub fn remove(&mut self, accessor: &str) -> Option<CellValue> {
        self.cells.remove(accessor)
    }

    pub fn contains(&self, accessor: &str) -> bool {
        self.cells.contains_key(accessor)
    }

    /// Move a value from one key to another, keeping the value intact.
    /// No-op when the old key is absent or the names are equal.
    pub fn rename_key(&mut self, old: &str, new: &str) {
        if old == new {
            return;
        }
        if let Some(value) = self.cells.remove(old) {
            self.cells.insert(new.to_string(), value);
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn accessors(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(|k| k.as_str())
    }
}

impl FromIterator<(String, CellValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, CellValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// The complete table state a host hands to the edit operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Row>,
    pub metadata: HashMap<String, String>,
}

impl TableData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    pub fn add_column(&mut self, column: Column) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// Append a row, rejecting keys that no column owns.
    /// Keys ⊆ accessors is the one invariant rows must keep.
    pub fn add_row(&mut self, row: Row) -> Result<(), String> {
        for key in row.accessors() {
            if self.column_index(key).is_none() {
                return Err(format!("Row key '{}' matches no column accessor", key));
            }
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn column(&self, accessor: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.accessor == accessor)
    }

    pub fn column_index(&self, accessor: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.accessor == accessor)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Accessors in display order
    pub fn column_accessors(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.accessor.clone()).collect()
    }

    /// Labels in display order
    pub fn column_labels(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.label.clone()).collect()
    }

    /// Cell value at a row index under a column accessor
    pub fn value_at(&self, row: usize, accessor: &str) -> Option<&CellValue> {
        self.rows.get(row)?.get(accessor)
    }

    /// Stringified rows in column order, empty string for absent cells
    pub fn to_string_table(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| {
                        row.get(&c.accessor)
                            .map(|v| v.to_string())
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect()
    }

    /// Generate a debug dump string for display
    pub fn debug_dump(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("TableData: {}\n", self.name));
        output.push_str(&format!(
            "Rows: {} | Columns: {}\n",
            self.row_count(),
            self.column_count()
        ));

        if !self.metadata.is_empty() {
            output.push_str("Metadata:\n");
            for (key, value) in &self.metadata {
                output.push_str(&format!("  {}: {}\n", key, value));
            }
        }

        output.push_str("\nColumns:\n");
        for column in &self.columns {
            output.push_str(&format!("  {} ({})", column.accessor, column.data_type));
            if column.label != column.accessor {
                output.push_str(&format!(" labeled '{}'", column.label));
            }
            output.push('\n');
        }

        // Show first few rows
        if self.row_count() > 0 {
            let sample_size = 5.min(self.row_count());
            output.push_str(&format!("\nFirst {} rows:\n", sample_size));

            for (row_idx, row) in self.to_string_table().iter().take(sample_size).enumerate() {
                output.push_str(&format!("  [{}]: ", row_idx));
                output.push_str(&row.join(", "));
                output.push('\n');
            }
        }

        output
    }
}
