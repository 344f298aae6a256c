use crate::commands::CmdResult;
use crate::error::{ProviderError, Result};
use crate::model::ProviderView;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: u64) -> Result<CmdResult> {
    let provider = store.find_by_id(id)?.ok_or_else(|| {
        tracing::warn!(id, "provider not found");
        ProviderError::NotFound(id)
    })?;
    Ok(CmdResult::default().with_listed(vec![ProviderView::from(provider)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Provider;
    use crate::store::InMemoryStore;

    #[test]
    fn returns_the_matching_provider() {
        let store = InMemoryStore::new();
        store
            .save(Provider::new("Acme", "Acme Corporation", "742 Evergreen Terrace"))
            .unwrap();
        store
            .save(Provider::new("Globex", "Globex Corporation", "1 Cypress Creek Rd"))
            .unwrap();

        let result = run(&store, 2).unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.listed[0].name, "Globex");
    }

    #[test]
    fn missing_id_is_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(run(&store, 9), Err(ProviderError::NotFound(9))));
    }
}
