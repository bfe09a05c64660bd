//! Storage abstractions for pulse persistence.
//!
//! Backends implement [`PulseStore`]: an idempotent upsert keyed by the
//! pulse's external id. Writes are isolated per record; one failure is
//! recorded in the outcome and the rest of the batch still lands. There
//! is no transaction across a batch.

pub mod memory;
pub mod mongo;

use async_trait::async_trait;

use crate::models::Pulse;

// Re-export for convenience
pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Per-batch result of an upsert pass.
///
/// An explicit per-item collection rather than side-effecting log lines,
/// so the driver can both log and count.
#[derive(Debug, Default)]
pub struct StoreOutcome {
    /// Ids written (created or replaced), in batch order.
    pub upserted: Vec<String>,
    /// Records that failed to persist.
    pub failures: Vec<StoreFailure>,
}

impl StoreOutcome {
    /// Fold another batch's outcome into this one.
    pub fn absorb(&mut self, other: StoreOutcome) {
        self.upserted.extend(other.upserted);
        self.failures.extend(other.failures);
    }
}

/// One record that could not be persisted.
#[derive(Debug, Clone)]
pub struct StoreFailure {
    /// External id of the offending record.
    pub id: String,
    /// Backend error description.
    pub reason: String,
}

/// Trait for pulse storage backends.
#[async_trait]
pub trait PulseStore: Send + Sync {
    /// Upsert every record in the batch, keyed by external id.
    ///
    /// Must not abort on a single failed record; failures are collected
    /// in the returned outcome instead.
    async fn upsert_batch(&self, pulses: &[Pulse]) -> StoreOutcome;
}
