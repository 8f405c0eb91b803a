//! Balance value object for the point ledger
//!
//! A [`Balance`] is an immutable snapshot of one user's point amount at a
//! point in time. It is replaced wholesale on every successful charge/use
//! rather than mutated in place, so a concurrent reader always observes a
//! complete snapshot. The arithmetic and validation rules for charging and
//! using points live here, colocated with the entity, so every caller gets
//! identical guarantees and the rules stay unit-testable without any store
//! or lock wiring.

use super::error::LedgerError;
use super::transaction::UserId;
use chrono::Utc;

/// Upper bound a balance may never exceed
pub const MAX_POINT: i64 = 100_000;

/// Minimum transactional unit for both charge and use
pub const MIN_AMOUNT: i64 = 100;

/// Immutable snapshot of a user's point balance
///
/// Invariant: `0 <= amount <= MAX_POINT` after every successful operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Balance {
    /// The user owning this balance
    pub user: UserId,

    /// Current point amount
    pub amount: i64,

    /// Milliseconds since the Unix epoch at which this snapshot was written
    pub updated_millis: i64,
}

impl Balance {
    /// Create a snapshot with an explicit amount and a fresh timestamp
    pub fn new(user: UserId, amount: i64) -> Self {
        Balance {
            user,
            amount,
            updated_millis: Utc::now().timestamp_millis(),
        }
    }

    /// Create the empty balance a previously unseen user starts from
    ///
    /// Never fails; amount is zero and the timestamp is the current time.
    pub fn empty(user: UserId) -> Self {
        Self::new(user, 0)
    }

    /// Compute the amount after charging `amount` points
    ///
    /// Pure function; no side effects. The caller is responsible for writing
    /// the result back under the per-user lock.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::AmountTooSmall`] when `amount` is below [`MIN_AMOUNT`]
    /// * [`LedgerError::BalanceOverflow`] when the charge would push the
    ///   balance past [`MAX_POINT`] (or past the integer range)
    pub fn charged_amount(&self, amount: i64) -> Result<i64, LedgerError> {
        if amount < MIN_AMOUNT {
            return Err(LedgerError::amount_too_small(amount));
        }

        let charged = self
            .amount
            .checked_add(amount)
            .ok_or_else(|| LedgerError::balance_overflow(self.user, self.amount, amount))?;

        if charged > MAX_POINT {
            return Err(LedgerError::balance_overflow(self.user, self.amount, amount));
        }

        Ok(charged)
    }

    /// Compute the amount left after using `amount` points
    ///
    /// Pure function; no side effects.
    ///
    /// # Errors
    ///
    /// * [`LedgerError::AmountTooSmall`] when `amount` is below [`MIN_AMOUNT`]
    /// * [`LedgerError::BalanceUnderflow`] when the debit would drop the
    ///   balance below zero
    pub fn remaining_after_use(&self, amount: i64) -> Result<i64, LedgerError> {
        if amount < MIN_AMOUNT {
            return Err(LedgerError::amount_too_small(amount));
        }

        let remaining = self
            .amount
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::balance_underflow(self.user, self.amount, amount))?;

        if remaining < 0 {
            return Err(LedgerError::balance_underflow(self.user, self.amount, amount));
        }

        Ok(remaining)
    }
}
