//! Point Ledger Library
//! # Overview
//!
//! This library provides a per-user point (wallet-balance) ledger with
//! serialized mutations per user and an append-only transaction history.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Balance, TransactionRecord, etc.)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::service`] - Read/charge/use/history orchestration
//!   - [`core::lock_registry`] - Per-user mutual exclusion
//!   - [`core::balance_store`] / [`core::history_store`] - In-memory stores
//!   - [`core::batch`] - Multi-threaded batch applier
//! - [`io`] - CSV input/output for the batch driver
//!
//! # Operations
//!
//! The ledger exposes four operations:
//!
//! - **Balance**: Read a user's current point balance
//! - **History**: Read a user's transaction records in insertion order
//! - **Charge**: Credit points to a user (minimum 100, balance capped at 100,000)
//! - **Use**: Debit points from a user (minimum 100, balance never negative)
//!
//! # Concurrency
//!
//! Concurrent charge/use calls for the same user are strictly serialized by
//! a per-user lock registry; calls for different users proceed fully in
//! parallel. Reads do not take the per-user lock.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    apply_operations, BalanceStore, BatchOutcome, HistoryStore, InMemoryBalanceStore,
    InMemoryHistoryStore, LedgerService, LockRegistry,
};
pub use crate::io::{read_operations_csv, write_balances_csv};
pub use crate::types::{
    Balance, LedgerError, OperationRecord, RecordId, TransactionKind, TransactionRecord, UserId,
    MAX_POINT, MIN_AMOUNT,
};
