//! Framework-independent editing core for tabular boxed expressions.
//!
//! The `data` module owns the table model and its pure edit operations;
//! a hosting UI renders through `data::row_source::RowSource` and swaps
//! its state for whatever the operations return.

pub mod config;
pub mod data;
pub mod utils;
