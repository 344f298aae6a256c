use super::backend::StorageBackend;
use crate::error::{ProviderError, Result};
use crate::model::Provider;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// In-memory storage backend for testing. Safe to share across threads.
#[derive(Default)]
pub struct MemBackend {
    records: Mutex<Vec<Provider>>,
    simulate_write_error: AtomicBool,
    writes: AtomicUsize,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend, as if a file with these records already existed.
    pub fn with_records(records: Vec<Provider>) -> Self {
        Self {
            records: Mutex::new(records),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Number of successful `save_records` calls.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl StorageBackend for MemBackend {
    fn load_records(&self) -> Result<Vec<Provider>> {
        Ok(self.records.lock().clone())
    }

    fn save_records(&self, records: &[Provider]) -> Result<()> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(ProviderError::Store("Simulated write error".to_string()));
        }
        *self.records.lock() = records.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://providers")
    }
}
