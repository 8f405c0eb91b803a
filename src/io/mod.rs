//! I/O module
//!
//! Handles CSV parsing and output for the batch driver.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `reader` - Synchronous CSV reader for operation files

pub mod csv_format;
pub mod reader;

pub use csv_format::{convert_csv_record, write_balances_csv, CsvRecord};
pub use reader::read_operations_csv;
