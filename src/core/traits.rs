//! Collaborator traits for balance and history storage
//!
//! The ledger service orchestrates two external collaborators: a balance
//! store holding the current snapshot per user and a history store holding
//! the append-only transaction log. Both are abstracted behind traits so the
//! in-memory reference implementations can be swapped for another backend
//! without touching the service.
//!
//! Implementations must be internally safe for concurrent reads and for
//! concurrent writes to distinct keys; single-writer-at-a-time-per-key
//! discipline for balances is supplied by the service's per-user lock.

use crate::types::{Balance, TransactionKind, TransactionRecord, UserId};

/// Storage for the current balance snapshot of each user
pub trait BalanceStore: Send + Sync {
    /// Fetch the current balance for a user
    ///
    /// Unknown ids yield an empty balance (amount zero); this never fails.
    fn select_by_id(&self, user: UserId) -> Balance;

    /// Upsert the balance for a user and return the persisted snapshot
    ///
    /// The returned snapshot carries a fresh timestamp.
    fn insert_or_update(&self, user: UserId, amount: i64) -> Balance;

    /// Snapshot every stored balance, in arbitrary order
    fn select_all(&self) -> Vec<Balance>;
}

/// Append-only storage for the transaction history
pub trait HistoryStore: Send + Sync {
    /// Append one record, assigning it the next record id
    fn insert(
        &self,
        user: UserId,
        amount: i64,
        kind: TransactionKind,
        timestamp_millis: i64,
    ) -> TransactionRecord;

    /// All records for a user, in insertion order
    fn select_all_by_user_id(&self, user: UserId) -> Vec<TransactionRecord>;
}
