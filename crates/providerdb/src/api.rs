//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for all providerdb operations, regardless of the client in front of it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Fills defaults** (page size from configuration)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## Sharing
//!
//! The store sits behind an `Arc`, so a `ProviderApi` is cheap to clone and every
//! clone talks to the same store and the same lock. This is how a multi-threaded
//! client hands one store to many workers.
//!
//! ## Generic Over DataStore
//!
//! `ProviderApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ProviderApi<FileStore>`
//! - Testing: `ProviderApi<InMemoryStore>`

use crate::commands;
use crate::config::DEFAULT_PAGE_SIZE;
use crate::error::Result;
use crate::model::{NewProvider, ProviderUpdate};
use crate::store::DataStore;
use std::sync::Arc;

pub struct ProviderApi<S: DataStore> {
    store: Arc<S>,
    default_page_size: usize,
}

impl<S: DataStore> Clone for ProviderApi<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            default_page_size: self.default_page_size,
        }
    }
}

impl<S: DataStore> ProviderApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn create_provider(&self, input: NewProvider) -> Result<commands::CmdResult> {
        commands::create::run(self.store.as_ref(), input)
    }

    pub fn get_provider(&self, id: u64) -> Result<commands::CmdResult> {
        commands::get::run(self.store.as_ref(), id)
    }

    pub fn list_providers(&self, page: usize, size: Option<usize>) -> Result<commands::CmdResult> {
        let size = size.unwrap_or(self.default_page_size);
        commands::list::run(self.store.as_ref(), page, size)
    }

    pub fn update_provider(
        &self,
        id: u64,
        changes: ProviderUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(self.store.as_ref(), id, changes)
    }

    pub fn delete_provider(&self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(self.store.as_ref(), id)
    }

    pub fn count_providers(&self) -> Result<commands::CmdResult> {
        commands::count::run(self.store.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::store::InMemoryStore;
    use std::thread;

    fn api() -> ProviderApi<InMemoryStore> {
        ProviderApi::new(InMemoryStore::new())
    }

    fn input(name: &str) -> NewProvider {
        NewProvider::new(name, "Some Company", "742 Evergreen Terrace")
    }

    #[test]
    fn test_list_uses_default_page_size() {
        let api = api().with_default_page_size(2);
        for name in ["Acme", "Globex", "Initech"] {
            api.create_provider(input(name)).unwrap();
        }

        let page = api.list_providers(0, None).unwrap().page.unwrap();
        assert_eq!(page.page_size, 2);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_explicit_size_wins() {
        let api = api().with_default_page_size(2);
        for name in ["Acme", "Globex", "Initech"] {
            api.create_provider(input(name)).unwrap();
        }
        let page = api.list_providers(0, Some(10)).unwrap().page.unwrap();
        assert_eq!(page.items.len(), 3);
    }

    #[test]
    fn test_full_lifecycle() {
        let api = api();
        let created = api.create_provider(input("Acme")).unwrap();
        let id = created.affected[0].id;

        assert_eq!(api.get_provider(id).unwrap().listed[0].name, "Acme");

        let changes = ProviderUpdate {
            name: Some("Acme Two".into()),
            ..Default::default()
        };
        api.update_provider(id, changes).unwrap();
        assert_eq!(api.get_provider(id).unwrap().listed[0].name, "Acme Two");

        api.delete_provider(id).unwrap();
        assert!(matches!(
            api.get_provider(id),
            Err(ProviderError::NotFound(_))
        ));
        assert_eq!(api.count_providers().unwrap().count, Some(0));
    }

    #[test]
    fn test_clones_share_one_store() {
        let api = api();
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let api = api.clone();
                thread::spawn(move || {
                    api.create_provider(input(&format!("Provider {}", i)))
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(api.count_providers().unwrap().count, Some(8));
    }
}
