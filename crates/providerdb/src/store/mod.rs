//! # Storage Layer
//!
//! This module defines the storage abstraction for providerdb. The [`DataStore`] trait
//! is the record-level contract the command layer works against; the
//! [`backend::StorageBackend`] trait underneath it handles raw I/O.
//!
//! ## Single-File Collection
//!
//! The whole provider collection lives in one JSON document (an array of records).
//! The collection, not the record, is the unit of persistence:
//!
//! 1. Every mutation takes the write lock.
//! 2. It reloads the full collection from the backend (never a cached copy).
//! 3. It applies the change in memory.
//! 4. It rewrites the full collection.
//!
//! There is no append log. A mutation costs O(collection size), which is fine for the
//! small registries this store is meant for. If that stops being true, the natural
//! next step is an append-only log with periodic compaction.
//!
//! ## Locking
//!
//! Each [`provider_store::ProviderStore`] owns one `parking_lot::RwLock`:
//! - **Reads** (`find_all` and everything built on it) take the shared guard.
//! - **Mutations** (`save`, `save_if_name_absent`, `update`, `delete_by_id`) take the
//!   exclusive guard for the entire read-modify-write, so mutations are serialized and
//!   each one observes the state left by the previous one.
//!
//! Guards are scoped, so they are released on every exit path, including errors.
//! The lock is process-local: two processes sharing one file get no guarantees.
//!
//! ## Crash Safety
//!
//! [`fs_backend::FsBackend`] writes to a temporary sibling file and renames it over the
//! target. Readers see either the previous or the next collection, and a crash
//! mid-write loses only the in-flight mutation.
//!
//! ## Missing File
//!
//! A backing file that does not exist yet is an empty collection. It is created on the
//! first successful write.
//!
//! ## Identity
//!
//! New ids are `max(existing ids) + 1`, or `1` for an empty collection, computed from
//! the freshly loaded collection under the write lock.
//!
//! ## Implementations
//!
//! - [`FileStore`]: production store over a JSON file.
//! - [`InMemoryStore`]: for testing logic without filesystem I/O.

use crate::error::Result;
use crate::model::Provider;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod provider_store;

pub use provider_store::ProviderStore;

/// Store backed by a JSON file on disk.
pub type FileStore = ProviderStore<fs_backend::FsBackend>;

/// Store backed by process memory.
pub type InMemoryStore = ProviderStore<mem_backend::MemBackend>;

/// Abstract interface for provider storage.
///
/// Implementations must be safe to share between threads and must serialize
/// mutations against each other.
pub trait DataStore: Send + Sync {
    /// Every stored provider, in storage order.
    fn find_all(&self) -> Result<Vec<Provider>>;

    /// The provider with the given id, if any.
    fn find_by_id(&self, id: u64) -> Result<Option<Provider>>;

    /// The first provider whose name matches ignoring case, if any.
    fn find_by_name(&self, name: &str) -> Result<Option<Provider>>;

    fn exists_by_name(&self, name: &str) -> Result<bool> {
        Ok(self.find_by_name(name)?.is_some())
    }

    /// Assign a fresh id, append, and persist. Any id on the input is overwritten.
    /// Does not check name uniqueness.
    fn save(&self, provider: Provider) -> Result<Provider>;

    /// Like [`DataStore::save`], but fails with `DuplicateName` when a provider with the
    /// same name (ignoring case) exists. Check and insert happen under one lock.
    fn save_if_name_absent(&self, provider: Provider) -> Result<Provider>;

    /// Replace the provider with the same id. Fails with `NotFound` when absent.
    fn update(&self, provider: Provider) -> Result<Provider>;

    /// Remove the provider with the given id. Returns whether anything was removed.
    fn delete_by_id(&self, id: u64) -> Result<bool>;

    fn count(&self) -> Result<usize> {
        Ok(self.find_all()?.len())
    }
}
