use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ProviderError, Result};
use crate::model::ProviderView;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, id: u64) -> Result<CmdResult> {
    let provider = store.find_by_id(id)?.ok_or_else(|| {
        tracing::warn!(id, "provider not found");
        ProviderError::NotFound(id)
    })?;

    // Someone else may have removed it between the lookup and here.
    if !store.delete_by_id(id)? {
        return Err(ProviderError::NotFound(id));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Provider deleted ({}): {}",
        provider.id, provider.name
    )));
    Ok(result.with_affected(vec![ProviderView::from(provider)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Provider;
    use crate::store::InMemoryStore;

    #[test]
    fn removes_the_provider() {
        let store = InMemoryStore::new();
        store
            .save(Provider::new("Acme", "Acme Corporation", "742 Evergreen Terrace"))
            .unwrap();

        let result = run(&store, 1).unwrap();
        assert_eq!(result.affected[0].name, "Acme");
        assert!(result.messages[0].content.contains("Provider deleted (1)"));
        assert!(store.find_by_id(1).unwrap().is_none());
    }

    #[test]
    fn missing_id_is_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(run(&store, 3), Err(ProviderError::NotFound(3))));
    }

    #[test]
    fn deleting_twice_fails_the_second_time() {
        let store = InMemoryStore::new();
        store
            .save(Provider::new("Acme", "Acme Corporation", "742 Evergreen Terrace"))
            .unwrap();
        run(&store, 1).unwrap();
        assert!(matches!(run(&store, 1), Err(ProviderError::NotFound(1))));
    }
}
