//! Multi-threaded batch applier for operation streams
//!
//! Applies a slice of [`OperationRecord`]s against one shared
//! [`LedgerService`] from a configurable number of worker threads. Rejected
//! operations (validation failures) are logged and counted, never fatal:
//! the remaining operations still run, matching the all-or-nothing contract
//! of each individual charge/use.
//!
//! Operations are split into contiguous chunks, one per worker. No ordering
//! is promised between operations applied by different workers; per-user
//! serialization comes from the service's lock registry, not from the
//! driver.

use crate::core::service::LedgerService;
use crate::core::traits::{BalanceStore, HistoryStore};
use crate::types::{OperationRecord, TransactionKind};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::warn;

/// Counts of applied and rejected operations from one batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchOutcome {
    /// Operations that committed a balance write and a history record
    pub applied: usize,

    /// Operations rejected by validation, with no state committed
    pub rejected: usize,
}

/// Apply `operations` against `service` using up to `workers` threads
///
/// A `workers` value of zero is treated as one. Returns the applied/rejected
/// tally once every operation has completed.
pub fn apply_operations<B, H>(
    service: &LedgerService<B, H>,
    operations: &[OperationRecord],
    workers: usize,
) -> BatchOutcome
where
    B: BalanceStore,
    H: HistoryStore,
{
    if operations.is_empty() {
        return BatchOutcome::default();
    }

    let workers = workers.max(1);
    let chunk_size = operations.len().div_ceil(workers);
    let applied = AtomicUsize::new(0);
    let rejected = AtomicUsize::new(0);

    std::thread::scope(|scope| {
        let applied = &applied;
        let rejected = &rejected;

        for chunk in operations.chunks(chunk_size) {
            scope.spawn(move || {
                for op in chunk {
                    let result = match op.kind {
                        TransactionKind::Charge => service.charge(op.user, op.amount),
                        TransactionKind::Use => service.use_points(op.user, op.amount),
                    };

                    match result {
                        Ok(_) => {
                            applied.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(error) => {
                            warn!(user = op.user, amount = op.amount, %error, "operation rejected");
                            rejected.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            });
        }
    });

    BatchOutcome {
        applied: applied.into_inner(),
        rejected: rejected.into_inner(),
    }
}
