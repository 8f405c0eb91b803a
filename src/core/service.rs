//! Ledger service orchestration
//!
//! The [`LedgerService`] composes the balance value object, the per-user
//! lock registry, and the two store collaborators into the four ledger
//! operations: read balance, read history, charge, and use.
//!
//! Mutations follow a single read-validate-write transition per call. The
//! per-user lock makes that transition atomic with respect to every other
//! mutator of the same user: each charge/use sees the balance exactly as
//! left by the previous completed call for that id. Reads do not take the
//! lock; they are best-effort consistent with the latest completed write.

use crate::core::balance_store::InMemoryBalanceStore;
use crate::core::history_store::InMemoryHistoryStore;
use crate::core::lock_registry::LockRegistry;
use crate::core::traits::{BalanceStore, HistoryStore};
use crate::types::{Balance, LedgerError, TransactionKind, TransactionRecord, UserId};
use tracing::debug;

/// Per-user point ledger with serialized mutations
///
/// Generic over its store collaborators; [`LedgerService::new`] wires the
/// in-memory reference stores.
pub struct LedgerService<B = InMemoryBalanceStore, H = InMemoryHistoryStore> {
    balances: B,
    history: H,
    locks: LockRegistry,
}

impl LedgerService {
    /// Create a ledger backed by the in-memory reference stores
    pub fn new() -> Self {
        Self::with_stores(InMemoryBalanceStore::new(), InMemoryHistoryStore::new())
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BalanceStore, H: HistoryStore> LedgerService<B, H> {
    /// Create a ledger over the given store collaborators
    pub fn with_stores(balances: B, history: H) -> Self {
        Self {
            balances,
            history,
            locks: LockRegistry::new(),
        }
    }

    /// Current balance for a user
    ///
    /// Unknown users read as an empty balance. Does not contend with
    /// in-flight mutations.
    ///
    /// # Errors
    ///
    /// [`LedgerError::UserNotFound`] when `user` is not positive.
    pub fn balance(&self, user: UserId) -> Result<Balance, LedgerError> {
        Self::validate_user(user)?;

        Ok(self.balances.select_by_id(user))
    }

    /// Transaction history for a user, in insertion order
    ///
    /// # Errors
    ///
    /// [`LedgerError::UserNotFound`] when `user` is not positive.
    pub fn history(&self, user: UserId) -> Result<Vec<TransactionRecord>, LedgerError> {
        Self::validate_user(user)?;

        Ok(self.history.select_all_by_user_id(user))
    }

    /// Credit `amount` points to a user
    ///
    /// Runs under the per-user lock: reads the current balance, validates
    /// the charge, writes the new snapshot, and appends a `Charge` record.
    /// On any failure nothing is written and no record is appended.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::UserNotFound`] when `user` is not positive
    /// * [`LedgerError::AmountTooSmall`] when `amount` is below the minimum unit
    /// * [`LedgerError::BalanceOverflow`] when the charge would exceed the maximum
    pub fn charge(&self, user: UserId, amount: i64) -> Result<Balance, LedgerError> {
        Self::validate_user(user)?;

        self.locks.with_lock(user, || {
            let current = self.balances.select_by_id(user);
            let charged = current.charged_amount(amount)?;

            let updated = self.balances.insert_or_update(user, charged);
            self.history
                .insert(user, amount, TransactionKind::Charge, updated.updated_millis);

            debug!(user, amount, balance = updated.amount, "charged points");
            Ok(updated)
        })
    }

    /// Debit `amount` points from a user
    ///
    /// Symmetric to [`charge`](Self::charge), appending a `Use` record.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::UserNotFound`] when `user` is not positive
    /// * [`LedgerError::AmountTooSmall`] when `amount` is below the minimum unit
    /// * [`LedgerError::BalanceUnderflow`] when the debit would drop below zero
    pub fn use_points(&self, user: UserId, amount: i64) -> Result<Balance, LedgerError> {
        Self::validate_user(user)?;

        self.locks.with_lock(user, || {
            let current = self.balances.select_by_id(user);
            let remaining = current.remaining_after_use(amount)?;

            let updated = self.balances.insert_or_update(user, remaining);
            self.history
                .insert(user, amount, TransactionKind::Use, updated.updated_millis);

            debug!(user, amount, balance = updated.amount, "used points");
            Ok(updated)
        })
    }

    /// Snapshot of every stored balance, in arbitrary order
    pub fn all_balances(&self) -> Vec<Balance> {
        self.balances.select_all()
    }

    fn validate_user(user: UserId) -> Result<(), LedgerError> {
        if user <= 0 {
            return Err(LedgerError::user_not_found(user));
        }
        Ok(())
    }
}
