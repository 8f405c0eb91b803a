//! CSV format handling for batch input and balance output
//!
//! This module centralizes all CSV format concerns:
//! - CsvRecord structure for deserialization of input rows
//! - Conversion from CSV records to domain operation records
//! - Balance output serialization
//!
//! Conversion functions are pure (no I/O) for easy testing.

use crate::types::{Balance, LedgerError, OperationRecord, TransactionKind, UserId};
use serde::Deserialize;
use std::io::Write;

/// CSV record structure for deserialization
///
/// Matches the input CSV format with columns: user, kind, amount.
/// The kind is kept as a string so an unknown value produces a descriptive
/// error for that row instead of failing the whole file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CsvRecord {
    pub user: UserId,
    pub kind: String,
    pub amount: i64,
}

/// Convert a CsvRecord to an OperationRecord
///
/// Parses the kind string case-insensitively into a [`TransactionKind`].
/// Amount and user validation is deliberately left to the ledger; the batch
/// driver reports those rejections per operation.
///
/// # Errors
///
/// [`LedgerError::InvalidKind`] when the kind is not `charge` or `use`.
pub fn convert_csv_record(
    record: CsvRecord,
    line: Option<u64>,
) -> Result<OperationRecord, LedgerError> {
    let kind = match record.kind.to_lowercase().as_str() {
        "charge" => TransactionKind::Charge,
        "use" => TransactionKind::Use,
        other => return Err(LedgerError::invalid_kind(other, line)),
    };

    Ok(OperationRecord {
        user: record.user,
        kind,
        amount: record.amount,
    })
}

/// Write balance snapshots to CSV format
///
/// Writes balances with columns: user, amount, updated_millis. Balances are
/// sorted by user id for deterministic output.
///
/// # Errors
///
/// [`LedgerError::IoError`] if writing to the underlying writer fails.
pub fn write_balances_csv(balances: &[Balance], output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["user", "amount", "updated_millis"])?;

    let mut sorted = balances.to_vec();
    sorted.sort_by_key(|balance| balance.user);

    for balance in sorted {
        writer.write_record(&[
            balance.user.to_string(),
            balance.amount.to_string(),
            balance.updated_millis.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
