//! Synchronous CSV reader for batch operation files
//!
//! Reads `user,kind,amount` rows into [`OperationRecord`]s. Malformed rows
//! (bad field types, unknown kinds) are logged and skipped so one bad line
//! never poisons the rest of the batch; only file-level failures are fatal.

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{LedgerError, OperationRecord};
use std::path::Path;
use tracing::warn;

/// Read all operation records from a CSV file
///
/// The file must carry a `user,kind,amount` header. Rows that fail to parse
/// or carry an unknown kind are skipped with a warning.
///
/// # Errors
///
/// * [`LedgerError::FileNotFound`] when the path does not exist
/// * [`LedgerError::ParseError`] / [`LedgerError::IoError`] when the file
///   cannot be opened or read at all
pub fn read_operations_csv(path: &Path) -> Result<Vec<OperationRecord>, LedgerError> {
    if !path.exists() {
        return Err(LedgerError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut operations = Vec::new();

    for (index, result) in reader.deserialize::<CsvRecord>().enumerate() {
        // Header occupies line 1; the first record is line 2.
        let line = index as u64 + 2;

        let record = match result {
            Ok(record) => record,
            Err(error) => {
                warn!(line, %error, "skipping malformed row");
                continue;
            }
        };

        match convert_csv_record(record, Some(line)) {
            Ok(op) => operations.push(op),
            Err(error) => {
                warn!(line, %error, "skipping invalid row");
            }
        }
    }

    Ok(operations)
}
