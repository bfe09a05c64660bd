// src/storage/memory.rs

//! In-memory storage backend.
//!
//! Backs `--dry-run` so a sync can be exercised without a MongoDB
//! instance; also the store of choice in tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::Pulse;
use crate::storage::{PulseStore, StoreOutcome};

/// Pulse store keeping documents in a process-local map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, Pulse>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held.
    pub fn len(&self) -> usize {
        self.documents.lock().expect("store mutex poisoned").len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fetch a document by external id.
    pub fn get(&self, id: &str) -> Option<Pulse> {
        self.documents
            .lock()
            .expect("store mutex poisoned")
            .get(id)
            .cloned()
    }
}

#[async_trait]
impl PulseStore for MemoryStore {
    async fn upsert_batch(&self, pulses: &[Pulse]) -> StoreOutcome {
        let mut outcome = StoreOutcome::default();
        let mut documents = self.documents.lock().expect("store mutex poisoned");

        for pulse in pulses {
            documents.insert(pulse.id.clone(), pulse.clone());
            outcome.upserted.push(pulse.id.clone());
        }

        outcome
    }
}
