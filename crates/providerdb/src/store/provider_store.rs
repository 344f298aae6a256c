use super::backend::StorageBackend;
use super::fs_backend::FsBackend;
use super::mem_backend::MemBackend;
use super::DataStore;
use crate::error::{ProviderError, Result};
use crate::model::Provider;
use parking_lot::RwLock;
use std::path::{Path, PathBuf};

pub struct ProviderStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    /// Guards the backing collection. Carries no data: the collection is
    /// reloaded from the backend on every access.
    lock: RwLock<()>,
}

impl<B: StorageBackend> ProviderStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            lock: RwLock::new(()),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> PathBuf {
        self.backend.location()
    }

    /// Shared helper for the mutating operations: load, change, persist,
    /// all under one exclusive guard. Nothing is written when `mutate` fails
    /// or reports no change.
    fn mutate<T>(
        &self,
        mutate: impl FnOnce(&mut Vec<Provider>) -> Result<(T, bool)>,
    ) -> Result<T> {
        let _guard = self.lock.write();
        let mut records = self.backend.load_records()?;
        let (out, changed) = mutate(&mut records)?;
        if changed {
            self.backend.save_records(&records)?;
        }
        Ok(out)
    }
}

impl ProviderStore<FsBackend> {
    /// Open (or lazily create) a store over the given JSON file.
    pub fn open(data_file: impl AsRef<Path>) -> Self {
        Self::with_backend(FsBackend::new(data_file.as_ref()))
    }
}

impl ProviderStore<MemBackend> {
    pub fn new() -> Self {
        Self::with_backend(MemBackend::new())
    }
}

impl Default for ProviderStore<MemBackend> {
    fn default() -> Self {
        Self::new()
    }
}

/// `max + 1` over the loaded collection, or `1` when it is empty.
fn next_id(records: &[Provider]) -> Result<u64> {
    match records.iter().map(|p| p.id).max() {
        None => Ok(1),
        Some(max) => max
            .checked_add(1)
            .ok_or_else(|| ProviderError::Store("Provider id space exhausted".to_string())),
    }
}

fn append(records: &mut Vec<Provider>, mut provider: Provider) -> Result<Provider> {
    provider.id = next_id(records)?;
    records.push(provider.clone());
    Ok(provider)
}

impl<B: StorageBackend> DataStore for ProviderStore<B> {
    fn find_all(&self) -> Result<Vec<Provider>> {
        let _guard = self.lock.read();
        let records = self.backend.load_records()?;
        tracing::debug!(count = records.len(), "loaded providers");
        Ok(records)
    }

    fn find_by_id(&self, id: u64) -> Result<Option<Provider>> {
        Ok(self.find_all()?.into_iter().find(|p| p.id == id))
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Provider>> {
        Ok(self.find_all()?.into_iter().find(|p| p.has_name(name)))
    }

    fn save(&self, provider: Provider) -> Result<Provider> {
        let saved = self.mutate(|records| Ok((append(records, provider)?, true)))?;
        tracing::info!(id = saved.id, name = %saved.name, "provider saved");
        Ok(saved)
    }

    fn save_if_name_absent(&self, provider: Provider) -> Result<Provider> {
        let saved = self.mutate(|records| {
            if records.iter().any(|p| p.has_name(&provider.name)) {
                return Err(ProviderError::DuplicateName(provider.name.clone()));
            }
            Ok((append(records, provider)?, true))
        })?;
        tracing::info!(id = saved.id, name = %saved.name, "provider saved");
        Ok(saved)
    }

    fn update(&self, provider: Provider) -> Result<Provider> {
        let id = provider.id;
        let result = self.mutate(|records| {
            let slot = records
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(ProviderError::NotFound(id))?;
            *slot = provider.clone();
            Ok((provider, true))
        });
        match &result {
            Ok(_) => tracing::info!(id, "provider updated"),
            Err(ProviderError::NotFound(_)) => tracing::warn!(id, "no provider to update"),
            Err(_) => {}
        }
        result
    }

    fn delete_by_id(&self, id: u64) -> Result<bool> {
        let removed = self.mutate(|records| {
            let before = records.len();
            records.retain(|p| p.id != id);
            let removed = records.len() != before;
            Ok((removed, removed))
        })?;
        if removed {
            tracing::info!(id, "provider deleted");
        } else {
            tracing::warn!(id, "no provider to delete");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use std::sync::Arc;
    use std::thread;

    fn provider(name: &str) -> Provider {
        Provider::new(name, format!("{} Corporation", name), "742 Evergreen Terrace")
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryStore::new();
        assert!(store.find_all().unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.find_by_id(1).unwrap().is_none());
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let store = InMemoryStore::new();
        let ids: Vec<u64> = ["Acme", "Globex", "Initech", "Umbrella"]
            .iter()
            .map(|n| store.save(provider(n)).unwrap().id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_save_overwrites_supplied_id() {
        let store = InMemoryStore::new();
        let mut input = provider("Acme");
        input.id = 99;
        let saved = store.save(input).unwrap();
        assert_eq!(saved.id, 1);
        assert!(store.find_by_id(99).unwrap().is_none());
    }

    #[test]
    fn test_next_id_follows_max_not_count() {
        let mut a = provider("Acme");
        a.id = 5;
        let mut b = provider("Globex");
        b.id = 2;
        let store = ProviderStore::with_backend(MemBackend::with_records(vec![a, b]));

        assert_eq!(store.save(provider("Initech")).unwrap().id, 6);
    }

    #[test]
    fn test_ids_not_reused_after_deleting_middle() {
        let store = InMemoryStore::new();
        for name in ["Acme", "Globex", "Initech"] {
            store.save(provider(name)).unwrap();
        }
        assert!(store.delete_by_id(2).unwrap());
        assert_eq!(store.save(provider("Umbrella")).unwrap().id, 4);
    }

    #[test]
    fn test_storage_order_is_insertion_order() {
        let store = InMemoryStore::new();
        for name in ["Zeta", "Alpha", "Mu"] {
            store.save(provider(name)).unwrap();
        }
        let names: Vec<String> = store.find_all().unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let store = InMemoryStore::new();
        store.save(provider("Acme")).unwrap();

        assert_eq!(store.find_by_name("acme").unwrap().unwrap().id, 1);
        assert_eq!(store.find_by_name("ACME").unwrap().unwrap().id, 1);
        assert!(store.exists_by_name("aCmE").unwrap());
        assert!(!store.exists_by_name("Globex").unwrap());
    }

    #[test]
    fn test_find_by_name_returns_first_in_storage_order() {
        let store = InMemoryStore::new();
        // save() does not enforce uniqueness
        store.save(provider("Acme")).unwrap();
        store.save(provider("ACME")).unwrap();
        assert_eq!(store.find_by_name("acme").unwrap().unwrap().id, 1);
    }

    #[test]
    fn test_save_if_name_absent_rejects_duplicate() {
        let store = InMemoryStore::new();
        store.save_if_name_absent(provider("Acme")).unwrap();

        let result = store.save_if_name_absent(provider("aCME"));
        assert!(matches!(result, Err(ProviderError::DuplicateName(name)) if name == "aCME"));
        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn test_delete_then_find_is_empty() {
        let store = InMemoryStore::new();
        let saved = store.save(provider("Acme")).unwrap();
        assert!(store.delete_by_id(saved.id).unwrap());
        assert!(store.find_by_id(saved.id).unwrap().is_none());
    }

    #[test]
    fn test_delete_missing_returns_false_without_writing() {
        let store = InMemoryStore::new();
        store.save(provider("Acme")).unwrap();
        assert!(!store.delete_by_id(42).unwrap());
        assert_eq!(store.backend().write_count(), 1);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_update_replaces_fields() {
        let store = InMemoryStore::new();
        let mut saved = store.save(provider("Acme")).unwrap();
        saved.address = "1 Infinite Loop, Cupertino".to_string();

        store.update(saved.clone()).unwrap();
        assert_eq!(store.find_by_id(saved.id).unwrap().unwrap(), saved);
    }

    #[test]
    fn test_update_missing_is_not_found_and_leaves_collection() {
        let store = InMemoryStore::new();
        store.save(provider("Acme")).unwrap();
        let before = store.find_all().unwrap();

        let mut ghost = provider("Ghost");
        ghost.id = 17;
        assert!(matches!(store.update(ghost), Err(ProviderError::NotFound(17))));
        assert_eq!(store.find_all().unwrap(), before);
        assert_eq!(store.backend().write_count(), 1);
    }

    #[test]
    fn test_write_failure_propagates_and_keeps_state() {
        let store = InMemoryStore::new();
        store.save(provider("Acme")).unwrap();
        store.backend().set_simulate_write_error(true);

        assert!(matches!(
            store.save(provider("Globex")),
            Err(ProviderError::Store(_))
        ));
        assert!(store.delete_by_id(1).is_err());
        assert_eq!(store.count().unwrap(), 1);

        store.backend().set_simulate_write_error(false);
        assert_eq!(store.save(provider("Globex")).unwrap().id, 2);
    }

    #[test]
    fn test_concurrent_saves_assign_distinct_ids() {
        let store = Arc::new(InMemoryStore::new());
        let n = 32;

        let handles: Vec<_> = (0..n)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.save(provider(&format!("Provider {}", i))).unwrap().id)
            })
            .collect();

        let mut ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=n as u64).collect::<Vec<_>>());
        assert_eq!(store.count().unwrap(), n);
    }

    #[test]
    fn test_concurrent_unique_saves_insert_once() {
        let store = Arc::new(InMemoryStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                let name = if i % 2 == 0 { "Acme" } else { "ACME" };
                thread::spawn(move || store.save_if_name_absent(provider(name)).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn test_store_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InMemoryStore>();
        assert_send_sync::<crate::store::FileStore>();
    }
}
