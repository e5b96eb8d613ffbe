#[cfg(test)]
mod tests {
    use boxed_table::config::EditorConfig;
    use boxed_table::data::handler::{
        apply_operation, HandlerConfiguration, HandlerGroup, HandlerItem, TableCursor,
        TableOperation,
    };
    use boxed_table::data::operations::EditError;
    use boxed_table::data::table::{CellValue, Column, DataType, Row, TableData};

    /// Helper to build the relation most tests start from
    fn relation(rows: &[(&str, f64)]) -> TableData {
        let mut table = TableData::new("relation");
        table.add_column(Column::new("client").with_type(DataType::String));
        table.add_column(Column::new("fee").with_type(DataType::Number));

        for (client, fee) in rows {
            let mut row = Row::new();
            row.set("client", CellValue::String(client.to_string()));
            row.set("fee", CellValue::Number(*fee));
            table.add_row(row).expect("row keys match columns");
        }
        table
    }

    fn full_handler_config() -> HandlerConfiguration {
        HandlerConfiguration::new(vec![
            HandlerGroup::new(
                "COLUMNS",
                vec![
                    HandlerItem::new("Insert Column Left", TableOperation::ColumnInsertLeft),
                    HandlerItem::new("Insert Column Right", TableOperation::ColumnInsertRight),
                    HandlerItem::new("Delete", TableOperation::ColumnDelete),
                ],
            ),
            HandlerGroup::new(
                "ROWS",
                vec![
                    HandlerItem::new("Insert Row Above", TableOperation::RowInsertAbove),
                    HandlerItem::new("Insert Row Below", TableOperation::RowInsertBelow),
                    HandlerItem::new("Delete", TableOperation::RowDelete),
                ],
            ),
        ])
    }

    #[test]
    fn test_full_edit_session() {
        // A realistic sequence: grow the table, rename, fill, then trim.
        let config = EditorConfig::default();
        let prefix = config.naming.column_prefix.as_str();
        let table = relation(&[("Acme", 100.5), ("Globex", 200.75)]);

        // Right-click the "fee" header, insert a column to its right
        let step1 = apply_operation(
            &table,
            TableOperation::ColumnInsertRight,
            TableCursor { row: 0, column: 1 },
            prefix,
        )
        .unwrap();
        assert_eq!(step1.column_accessors(), vec!["client", "fee", "column-3"]);

        // Rename it through the header popover
        let step2 = step1
            .rename_column("column-3", "currency", DataType::String)
            .unwrap();
        assert_eq!(
            step2.column_labels(),
            vec!["client", "fee", "currency"]
        );

        // Fill the new column cell by cell
        let step3 = step2
            .edit_cell(0, "currency", CellValue::String("EUR".to_string()))
            .unwrap()
            .edit_cell(1, "currency", CellValue::String("USD".to_string()))
            .unwrap();
        assert_eq!(step3.value_at(1, "currency").unwrap().to_string(), "USD");

        // Add a row below the last one and give it values
        let step4 = apply_operation(
            &step3,
            TableOperation::RowInsertBelow,
            TableCursor { row: 1, column: 0 },
            prefix,
        )
        .unwrap();
        assert_eq!(step4.row_count(), 3);
        assert!(step4.rows[2].is_empty());

        let step5 = step4
            .edit_cell(2, "client", CellValue::String("Initech".to_string()))
            .unwrap();

        // Delete the "fee" column; its values disappear from every row
        let step6 = apply_operation(
            &step5,
            TableOperation::ColumnDelete,
            TableCursor { row: 0, column: 1 },
            prefix,
        )
        .unwrap();
        assert_eq!(step6.column_accessors(), vec!["client", "currency"]);
        assert!(step6.rows.iter().all(|r| !r.contains("fee")));

        // Every intermediate snapshot is still intact
        assert_eq!(table.column_count(), 2);
        assert_eq!(step3.row_count(), 2);
        assert!(step5.rows[0].contains("fee"));
    }

    #[test]
    fn test_rename_cascade_across_sparse_rows() {
        let mut table = relation(&[("Acme", 1.0)]);
        table.add_row(Row::new()).unwrap();

        let renamed = table
            .rename_column("fee", "price", DataType::Number)
            .unwrap();

        assert_eq!(renamed.value_at(0, "price"), Some(&CellValue::Number(1.0)));
        assert!(renamed.value_at(0, "fee").is_none());
        // The sparse row gains nothing from the rename
        assert!(renamed.rows[1].is_empty());
    }

    #[test]
    fn test_config_gates_operations() {
        let config = full_handler_config();
        let narrow = HandlerConfiguration::new(vec![HandlerGroup::new(
            "COLUMNS",
            vec![HandlerItem::new(
                "Insert Column Left",
                TableOperation::ColumnInsertLeft,
            )],
        )]);

        assert!(config.allows(TableOperation::RowDelete));
        assert!(!narrow.allows(TableOperation::RowDelete));

        // A host resolves a clicked menu entry to its operation
        let item = config.item_named("Insert Row Above").unwrap();
        let table = relation(&[("Acme", 1.0)]);
        let next = apply_operation(
            &table,
            item.operation,
            TableCursor { row: 0, column: 0 },
            "column-",
        )
        .unwrap();
        assert_eq!(next.row_count(), 2);
    }

    #[test]
    fn test_generated_names_never_collide_over_a_session() {
        let mut table = TableData::new("relation");
        table.add_column(Column::new("column-2"));

        // Repeated inserts at the same spot keep producing fresh names
        for _ in 0..5 {
            table = table
                .insert_column(
                    0,
                    boxed_table::data::operations::ColumnPlacement::Before,
                    "column-",
                )
                .unwrap();
        }

        let mut accessors = table.column_accessors();
        let total = accessors.len();
        accessors.sort();
        accessors.dedup();
        assert_eq!(accessors.len(), total);
    }

    #[test]
    fn test_failed_operation_changes_nothing() {
        let table = relation(&[("Acme", 1.0)]);
        let snapshot = table.clone();

        assert_eq!(
            table.delete_row(9).unwrap_err(),
            EditError::InvalidIndex { index: 9, len: 1 }
        );
        assert_eq!(
            table
                .rename_column("client", "fee", DataType::String)
                .unwrap_err(),
            EditError::DuplicateColumn("fee".to_string())
        );
        assert_eq!(table, snapshot);
    }
}
