//! Types module
//!
//! Contains core data structures used throughout the ledger.
//! This module organizes types into logical submodules:
//! - `balance`: Balance value object and its arithmetic rules
//! - `transaction`: Transaction kind, history record, and identifiers
//! - `error`: Error types for the point ledger

pub mod balance;
pub mod error;
pub mod transaction;

pub use balance::{Balance, MAX_POINT, MIN_AMOUNT};
pub use error::LedgerError;
pub use transaction::{OperationRecord, RecordId, TransactionKind, TransactionRecord, UserId};
