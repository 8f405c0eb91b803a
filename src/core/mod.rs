//! Core business logic module
//!
//! This module contains the ledger's core components:
//! - `traits` - Store collaborator abstractions
//! - `service` - Read/charge/use/history orchestration
//! - `lock_registry` - Per-user mutual exclusion
//! - `balance_store` / `history_store` - In-memory reference stores
//! - `batch` - Multi-threaded batch applier

pub mod balance_store;
pub mod batch;
pub mod history_store;
pub mod lock_registry;
pub mod service;
pub mod traits;

pub use balance_store::InMemoryBalanceStore;
pub use batch::{apply_operations, BatchOutcome};
pub use history_store::InMemoryHistoryStore;
pub use lock_registry::LockRegistry;
pub use service::LedgerService;
pub use traits::{BalanceStore, HistoryStore};
