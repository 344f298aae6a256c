use crate::error::Result;
use crate::model::Provider;
use std::path::PathBuf;

/// Abstract interface for raw collection I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while ProviderStore handles the "what" (locking, identity, lookups).
pub trait StorageBackend: Send + Sync {
    /// Load the full collection in storage order.
    /// Returns an empty collection if nothing has been written yet.
    /// Returns Err only on actual I/O or decoding errors.
    fn load_records(&self) -> Result<Vec<Provider>>;

    /// Replace the full collection.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_records(&self, records: &[Provider]) -> Result<()>;

    /// Where the collection lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
