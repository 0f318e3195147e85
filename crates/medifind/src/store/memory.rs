//! In-memory store for tests and embedding.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::error::Result;
use crate::provider::Provider;

use super::RecordStore;

/// Keeps the collection in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<Provider>>,
    saves: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`.
    pub fn with_records(records: Vec<Provider>) -> Self {
        Self {
            records: Mutex::new(records),
            saves: AtomicUsize::new(0),
        }
    }

    /// Number of successful [`RecordStore::save_all`] calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl RecordStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Provider>> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.clone())
    }

    fn save_all(&self, records: &[Provider]) -> Result<()> {
        let mut stored = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        *stored = records.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
