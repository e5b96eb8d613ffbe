//! Table handler model
//!
//! The context menu itself is a host concern; this module models what
//! the menu can offer (named items grouped per configuration) and turns
//! a chosen operation plus its cursor target into the core edit ops.

use super::operations::{ColumnPlacement, EditError, RowPlacement};
use super::table::TableData;
use serde::{Deserialize, Serialize};

/// Structural edits a handler menu can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableOperation {
    ColumnInsertLeft,
    ColumnInsertRight,
    ColumnDelete,
    RowInsertAbove,
    RowInsertBelow,
    RowDelete,
}

impl TableOperation {
    /// Column operations resolve against the cursor's column, row
    /// operations against its row.
    pub fn targets_columns(&self) -> bool {
        matches!(
            self,
            TableOperation::ColumnInsertLeft
                | TableOperation::ColumnInsertRight
                | TableOperation::ColumnDelete
        )
    }
}

/// One named menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerItem {
    pub name: String,
    pub operation: TableOperation,
}

impl HandlerItem {
    pub fn new(name: impl Into<String>, operation: TableOperation) -> Self {
        Self {
            name: name.into(),
            operation,
        }
    }
}

/// A titled group of menu entries ("COLUMNS", "ROWS", ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandlerGroup {
    pub group: String,
    pub items: Vec<HandlerItem>,
}

impl HandlerGroup {
    pub fn new(group: impl Into<String>, items: Vec<HandlerItem>) -> Self {
        Self {
            group: group.into(),
            items,
        }
    }
}

/// Ordered groups describing the whole handler menu for one table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HandlerConfiguration {
    pub groups: Vec<HandlerGroup>,
}

impl HandlerConfiguration {
    pub fn new(groups: Vec<HandlerGroup>) -> Self {
        Self { groups }
    }

    /// Whether any entry triggers the given operation
    pub fn allows(&self, operation: TableOperation) -> bool {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter())
            .any(|item| item.operation == operation)
    }

    /// Look an entry up by its display name
    pub fn item_named(&self, name: &str) -> Option<&HandlerItem> {
        self.groups
            .iter()
            .flat_map(|g| g.items.iter())
            .find(|item| item.name == name)
    }
}

impl From<Vec<HandlerGroup>> for HandlerConfiguration {
    fn from(groups: Vec<HandlerGroup>) -> Self {
        Self { groups }
    }
}

/// Model-coordinate target of a context-menu invocation
///
/// The host resolves its rendered position back to these coordinates;
/// the presentation-only ordinal column is not counted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCursor {
    pub row: usize,
    pub column: usize,
}

/// Dispatch one handler operation onto the core edit ops
pub fn apply_operation(
    table: &TableData,
    operation: TableOperation,
    cursor: TableCursor,
    column_prefix: &str,
) -> Result<TableData, EditError> {
    match operation {
        TableOperation::ColumnInsertLeft => {
            table.insert_column(cursor.column, ColumnPlacement::Before, column_prefix)
        }
        TableOperation::ColumnInsertRight => {
            table.insert_column(cursor.column, ColumnPlacement::After, column_prefix)
        }
        TableOperation::ColumnDelete => {
            let accessor = table
                .columns
                .get(cursor.column)
                .map(|c| c.accessor.clone())
                .ok_or(EditError::InvalidIndex {
                    index: cursor.column,
                    len: table.column_count(),
                })?;
            table.delete_column(&accessor)
        }
        TableOperation::RowInsertAbove => table.insert_row(cursor.row, RowPlacement::Above),
        TableOperation::RowInsertBelow => table.insert_row(cursor.row, RowPlacement::Below),
        TableOperation::RowDelete => table.delete_row(cursor.row),
    }
}
