// Table Debug Binary - For exercising the edit operations in isolation
// This binary is properly registered in Cargo.toml
// Run with: cargo run --bin table-debug [path/to/file.csv|.json]

use boxed_table::config::EditorConfig;
use boxed_table::data::handler::{apply_operation, TableCursor, TableOperation};
use boxed_table::data::operations::next_column_name;
use boxed_table::data::table::{CellValue, Column, DataType, Row, TableData};
use boxed_table::data::table_loaders::{load_csv_to_table, load_json_to_table};
use boxed_table::utils::logging;

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = EditorConfig::load().unwrap_or_else(|_| EditorConfig::default());
    let prefix = config.naming.column_prefix.as_str();

    // With a file argument, just load it and dump what was inferred
    if let Some(path) = std::env::args().nth(1) {
        println!("=== Loading {} ===\n", path);
        let table = if path.ends_with(".json") {
            load_json_to_table(&path, "loaded")?
        } else {
            load_csv_to_table(&path, "loaded")?
        };
        println!("{}", table.debug_dump());
        return Ok(());
    }

    println!("=== Table Debug (Cargo Binary) ===");
    println!("Walks a sample relation through every handler operation.\n");

    // Build a small relation the way a host would after a few edits
    let mut table = TableData::new("monthly_fees");
    table.add_column(Column::new("client").with_type(DataType::String));
    table.add_column(Column::new("fee").with_type(DataType::Number));
    table.add_column(Column::new("active").with_type(DataType::Boolean));

    let seed = vec![
        ("Acme", 100.50, true),
        ("Globex", 200.75, false),
        ("Initech", 150.25, true),
    ];
    for (client, fee, active) in seed {
        let mut row = Row::new();
        row.set("client", CellValue::String(client.to_string()));
        row.set("fee", CellValue::Number(fee));
        row.set("active", CellValue::Boolean(active));
        table.add_row(row).unwrap();
    }

    println!("Initial state:");
    println!("{}", table.debug_dump());

    // Test 1: Insert Column Right
    println!("Test 1: Insert Column Right of 'fee'");
    println!("────────────────────────────────────");
    let cursor = TableCursor { row: 0, column: 1 };
    let table = apply_operation(&table, TableOperation::ColumnInsertRight, cursor, prefix)?;
    println!("  Columns: {:?}", table.column_accessors());
    println!(
        "  Next generated name would be: {}\n",
        next_column_name(&table.columns, prefix)
    );

    // Test 2: Rename the inserted column
    println!("Test 2: Rename the new column to 'currency'");
    println!("───────────────────────────────────────────");
    let generated = table.columns[2].accessor.clone();
    let table = table.rename_column(&generated, "currency", DataType::String)?;
    println!("  Columns: {:?}", table.column_accessors());

    // Test 3: Fill cells in the renamed column
    println!("\nTest 3: Edit cells under 'currency'");
    println!("───────────────────────────────────");
    let mut table = table;
    for (i, code) in ["EUR", "USD", "EUR"].iter().enumerate() {
        table = table.edit_cell(i, "currency", CellValue::String(code.to_string()))?;
    }
    println!("{}", table.debug_dump());

    // Test 4: Row insertion above and below
    println!("Test 4: Insert rows");
    println!("───────────────────");
    let table = apply_operation(&table, TableOperation::RowInsertAbove, cursor, prefix)?;
    println!("  After insert above row 0: {} rows", table.row_count());
    let table = apply_operation(
        &table,
        TableOperation::RowInsertBelow,
        TableCursor {
            row: table.row_count() - 1,
            column: 0,
        },
        prefix,
    )?;
    println!("  After insert below last: {} rows", table.row_count());
    println!("  New rows are empty: {}\n", table.rows[0].is_empty());

    // Test 5: Delete the empty rows again
    println!("Test 5: Delete rows");
    println!("───────────────────");
    let table = table.delete_row(0)?;
    let table = table.delete_row(table.row_count() - 1)?;
    println!("  Back to {} rows\n", table.row_count());

    // Test 6: Delete a column through the handler
    println!("Test 6: Delete 'active' via cursor");
    println!("──────────────────────────────────");
    let active_index = table.column_index("active").unwrap();
    let table = apply_operation(
        &table,
        TableOperation::ColumnDelete,
        TableCursor {
            row: 0,
            column: active_index,
        },
        prefix,
    )?;
    println!("{}", table.debug_dump());

    println!("All table operations complete.");
    Ok(())
}
