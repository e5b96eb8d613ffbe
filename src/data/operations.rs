//! Pure edit operations over `TableData`
//!
//! Every operation is a single-step, copy-on-write transform: the
//! receiver is left untouched and the result is a brand-new value. The
//! host owns the authoritative state and swaps it for the result.

use super::table::{CellValue, Column, DataType, Row, TableData};
use std::fmt;
use tracing::debug;

/// Where a new column lands relative to the target index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPlacement {
    Before,
    After,
}

/// Where a new row lands relative to the target index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPlacement {
    Above,
    Below,
}

/// Failures of the edit operations
///
/// All of these are contract violations: a host that validates its UI
/// state (no menu entry for a missing row, uniqueness pre-checked on
/// rename) never sees them. Nothing is mutated when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    InvalidIndex { index: usize, len: usize },
    UnknownColumn(String),
    DuplicateColumn(String),
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditError::InvalidIndex { index, len } => {
                write!(f, "Index {} is outside the collection (length {})", index, len)
            }
            EditError::UnknownColumn(accessor) => {
                write!(f, "No column with accessor '{}'", accessor)
            }
            EditError::DuplicateColumn(name) => {
                write!(f, "Column name '{}' is already in use", name)
            }
        }
    }
}

impl std::error::Error for EditError {}

/// First free `prefix + n` name, counting up from one past the current
/// column count. Freshness is checked against both accessors and labels,
/// so the generated column can use the same string for both.
pub fn next_column_name(columns: &[Column], prefix: &str) -> String {
    let mut n = columns.len() + 1;
    loop {
        let candidate = format!("{}{}", prefix, n);
        let taken = columns
            .iter()
            .any(|c| c.accessor == candidate || c.label == candidate);
        if !taken {
            return candidate;
        }
        n += 1;
    }
}

impl TableData {
    /// Rename a column and migrate the key in every row that carries it.
    ///
    /// Label and accessor both become `new_name`; the value stored under
    /// the old key moves to the new one untouched. Renaming a column to
    /// its current name is allowed (the way a host changes only the data
    /// type), but taking a name owned by a different column is refused.
    pub fn rename_column(
        &self,
        target: &str,
        new_name: &str,
        new_type: DataType,
    ) -> Result<TableData, EditError> {
        let index = self
            .column_index(target)
            .ok_or_else(|| EditError::UnknownColumn(target.to_string()))?;

        let collision = self
            .columns
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && (c.accessor == new_name || c.label == new_name));
        if collision {
            return Err(EditError::DuplicateColumn(new_name.to_string()));
        }

        let mut next = self.clone();
        {
            let column = &mut next.columns[index];
            column.accessor = new_name.to_string();
            column.label = new_name.to_string();
            column.data_type = new_type;
        }
        for row in &mut next.rows {
            row.rename_key(target, new_name);
        }

        debug!(
            "Renamed column '{}' to '{}', migrating the key across {} rows",
            target,
            new_name,
            next.row_count()
        );
        Ok(next)
    }

    /// Set one cell in one row; the key is added if absent.
    pub fn edit_cell(
        &self,
        row_index: usize,
        accessor: &str,
        value: CellValue,
    ) -> Result<TableData, EditError> {
        if row_index >= self.rows.len() {
            return Err(EditError::InvalidIndex {
                index: row_index,
                len: self.rows.len(),
            });
        }
        // Keys must stay within the current accessors
        if self.column_index(accessor).is_none() {
            return Err(EditError::UnknownColumn(accessor.to_string()));
        }

        let mut next = self.clone();
        next.rows[row_index].set(accessor, value);
        Ok(next)
    }

    /// Splice in a freshly named column next to `at_index`.
    ///
    /// The new column starts with `DataType::Undefined` and no values in
    /// any row; rows are carried over as-is.
    pub fn insert_column(
        &self,
        at_index: usize,
        placement: ColumnPlacement,
        prefix: &str,
    ) -> Result<TableData, EditError> {
        if at_index >= self.columns.len() {
            return Err(EditError::InvalidIndex {
                index: at_index,
                len: self.columns.len(),
            });
        }

        let name = next_column_name(&self.columns, prefix);
        let position = match placement {
            ColumnPlacement::Before => at_index,
            ColumnPlacement::After => at_index + 1,
        };

        let mut next = self.clone();
        next.columns.insert(position, Column::new(name.clone()));

        debug!("Inserted column '{}' at position {}", name, position);
        Ok(next)
    }

    /// Remove a column and strip its key from every row.
    pub fn delete_column(&self, target: &str) -> Result<TableData, EditError> {
        let index = self
            .column_index(target)
            .ok_or_else(|| EditError::UnknownColumn(target.to_string()))?;

        let mut next = self.clone();
        next.columns.remove(index);
        for row in &mut next.rows {
            row.remove(target);
        }

        debug!("Deleted column '{}' (was at position {})", target, index);
        Ok(next)
    }

    /// Splice an empty row next to `at_index`.
    pub fn insert_row(
        &self,
        at_index: usize,
        placement: RowPlacement,
    ) -> Result<TableData, EditError> {
        if at_index >= self.rows.len() {
            return Err(EditError::InvalidIndex {
                index: at_index,
                len: self.rows.len(),
            });
        }

        let position = match placement {
            RowPlacement::Above => at_index,
            RowPlacement::Below => at_index + 1,
        };

        let mut next = self.clone();
        next.rows.insert(position, Row::new());

        debug!("Inserted empty row at position {}", position);
        Ok(next)
    }

    /// Remove the row at `at_index`.
    pub fn delete_row(&self, at_index: usize) -> Result<TableData, EditError> {
        if at_index >= self.rows.len() {
            return Err(EditError::InvalidIndex {
                index: at_index,
                len: self.rows.len(),
            });
        }

        let mut next = self.clone();
        next.rows.remove(at_index);

        debug!("Deleted row at position {}", at_index);
        Ok(next)
    }
}
