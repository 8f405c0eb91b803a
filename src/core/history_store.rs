//! In-memory transaction history table
//!
//! Reference implementation of [`HistoryStore`]. Records are appended to a
//! per-user vector and never modified afterwards; record ids come from a
//! process-wide atomic cursor, so they are unique and strictly increasing
//! across all users.

use crate::core::traits::HistoryStore;
use crate::types::{TransactionKind, TransactionRecord, UserId};
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Thread-safe append-only history keyed by user id
#[derive(Debug, Default)]
pub struct InMemoryHistoryStore {
    records: DashMap<UserId, Vec<TransactionRecord>>,
    cursor: AtomicI64,
}

impl InMemoryHistoryStore {
    /// Create an empty store with the id cursor at zero
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
            cursor: AtomicI64::new(0),
        }
    }
}

impl HistoryStore for InMemoryHistoryStore {
    fn insert(
        &self,
        user: UserId,
        amount: i64,
        kind: TransactionKind,
        timestamp_millis: i64,
    ) -> TransactionRecord {
        let id = self.cursor.fetch_add(1, Ordering::SeqCst) + 1;
        let record = TransactionRecord {
            id,
            user,
            amount,
            kind,
            timestamp_millis,
        };

        self.records
            .entry(user)
            .or_insert_with(Vec::new)
            .push(record.clone());
        record
    }

    fn select_all_by_user_id(&self, user: UserId) -> Vec<TransactionRecord> {
        self.records
            .get(&user)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }
}
