//! Error types for the point ledger
//!
//! This module defines all error kinds surfaced by ledger operations and the
//! batch driver.
//!
//! # Error Categories
//!
//! - **Domain errors**: invalid user ids, amounts below the minimum unit,
//!   overflow/underflow of a balance. These are deterministic functions of
//!   the input, never transient, and the core performs no retries.
//! - **Batch input errors**: file I/O failures and malformed CSV rows from
//!   the batch driver.

use super::transaction::UserId;
use thiserror::Error;

/// Main error type for the point ledger
///
/// Every error is surfaced immediately and synchronously to the caller; a
/// failed validation never reaches the store write or the history append, so
/// no partial state is ever committed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The user id is not a positive integer
    #[error("User {user} not found")]
    UserNotFound {
        /// The rejected user id
        user: UserId,
    },

    /// The requested amount is below the minimum transactional unit
    #[error("Amount {amount} is below the minimum transactional unit of {min}")]
    AmountTooSmall {
        /// The rejected amount
        amount: i64,
        /// The minimum accepted amount
        min: i64,
    },

    /// A charge would push the balance above the maximum
    #[error("Charging {amount} for user {user} would exceed the maximum balance {max} (current: {current})")]
    BalanceOverflow {
        /// The user whose charge was rejected
        user: UserId,
        /// Balance at the time of the attempt
        current: i64,
        /// The rejected charge amount
        amount: i64,
        /// The maximum a balance may reach
        max: i64,
    },

    /// A use would push the balance below zero
    #[error("Using {amount} for user {user} would drop the balance below zero (current: {current})")]
    BalanceUnderflow {
        /// The user whose use was rejected
        user: UserId,
        /// Balance at the time of the attempt
        current: i64,
        /// The rejected use amount
        amount: i64,
    },

    /// Batch input file not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error while reading batch input or writing output
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error in the batch input
    ///
    /// Recoverable from the driver's perspective: the malformed row is
    /// skipped and processing continues with the next row.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Unknown transaction kind in a batch input row
    #[error("Invalid transaction kind '{kind}'{}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidKind {
        /// The unrecognized kind string
        kind: String,
        /// Line number where the row occurred (if available)
        line: Option<u64>,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        LedgerError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl LedgerError {
    /// Create a UserNotFound error
    pub fn user_not_found(user: UserId) -> Self {
        LedgerError::UserNotFound { user }
    }

    /// Create an AmountTooSmall error against the minimum unit
    pub fn amount_too_small(amount: i64) -> Self {
        LedgerError::AmountTooSmall {
            amount,
            min: super::balance::MIN_AMOUNT,
        }
    }

    /// Create a BalanceOverflow error against the maximum balance
    pub fn balance_overflow(user: UserId, current: i64, amount: i64) -> Self {
        LedgerError::BalanceOverflow {
            user,
            current,
            amount,
            max: super::balance::MAX_POINT,
        }
    }

    /// Create a BalanceUnderflow error
    pub fn balance_underflow(user: UserId, current: i64, amount: i64) -> Self {
        LedgerError::BalanceUnderflow {
            user,
            current,
            amount,
        }
    }

    /// Create an InvalidKind error
    pub fn invalid_kind(kind: &str, line: Option<u64>) -> Self {
        LedgerError::InvalidKind {
            kind: kind.to_string(),
            line,
        }
    }
}
