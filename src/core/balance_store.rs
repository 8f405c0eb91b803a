//! In-memory balance table
//!
//! Reference implementation of [`BalanceStore`] backed by a concurrent map.
//! Balances are stored as immutable snapshots and replaced wholesale on
//! every upsert; a reader always observes a complete snapshot, never a
//! partially updated one.

use crate::core::traits::BalanceStore;
use crate::types::{Balance, UserId};
use dashmap::DashMap;

/// Thread-safe in-memory map of user id to balance snapshot
#[derive(Debug, Default)]
pub struct InMemoryBalanceStore {
    balances: DashMap<UserId, Balance>,
}

impl InMemoryBalanceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            balances: DashMap::new(),
        }
    }
}

impl BalanceStore for InMemoryBalanceStore {
    /// Fetch the stored snapshot, or an empty balance for an unknown user
    ///
    /// The empty balance is not persisted; a user only occupies a slot once
    /// a charge/use actually writes one.
    fn select_by_id(&self, user: UserId) -> Balance {
        self.balances
            .get(&user)
            .map(|entry| *entry.value())
            .unwrap_or_else(|| Balance::empty(user))
    }

    fn insert_or_update(&self, user: UserId, amount: i64) -> Balance {
        let snapshot = Balance::new(user, amount);
        self.balances.insert(user, snapshot);
        snapshot
    }

    fn select_all(&self) -> Vec<Balance> {
        self.balances.iter().map(|entry| *entry.value()).collect()
    }
}
