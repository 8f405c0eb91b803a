//! Transaction-related types for the point ledger
//!
//! This module defines the transaction kind, the immutable history record
//! produced by every successful charge/use, and the operation record consumed
//! by the batch driver.

use serde::{Deserialize, Serialize};

/// User identifier
///
/// The ledger only accepts positive user ids; zero and negative values are
/// rejected with `LedgerError::UserNotFound`.
pub type UserId = i64;

/// History record identifier, assigned by the history store
pub type RecordId = i64;

/// Direction of a ledger operation
///
/// The amount stored alongside a record is always the positive magnitude of
/// the operation; the kind disambiguates credit from debit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    /// Credit operation increasing a user's balance
    Charge,

    /// Debit operation decreasing a user's balance
    Use,
}

/// Immutable log entry for one charge or use event
///
/// Created exactly once per successful charge/use call and never modified
/// afterwards. Records are retrieved per user in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRecord {
    /// Record id assigned by the history store, strictly increasing
    pub id: RecordId,

    /// The user this record belongs to
    pub user: UserId,

    /// Positive magnitude of the operation
    pub amount: i64,

    /// Whether the operation credited or debited the balance
    pub kind: TransactionKind,

    /// Milliseconds since the Unix epoch at which the operation committed
    pub timestamp_millis: i64,
}

/// One requested mutation, as read from a batch input file
///
/// Unlike [`TransactionRecord`] this carries no id or timestamp; it is a
/// request, not a committed event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationRecord {
    /// The user to mutate
    pub user: UserId,

    /// Requested direction
    pub kind: TransactionKind,

    /// Requested positive magnitude
    pub amount: i64,
}
