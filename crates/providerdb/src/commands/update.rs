use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ProviderError, Result};
use crate::model::{ProviderUpdate, ProviderView};
use crate::store::DataStore;

/// Overlay `changes` onto provider `id`.
///
/// The rename check reads the collection before the write lock is taken, so two
/// concurrent renames onto the same name can both pass it.
pub fn run<S: DataStore>(store: &S, id: u64, changes: ProviderUpdate) -> Result<CmdResult> {
    let current = store.find_by_id(id)?.ok_or(ProviderError::NotFound(id))?;

    let mut result = CmdResult::default();
    if changes.is_empty() {
        result.add_message(CmdMessage::info(format!("Nothing to update ({})", id)));
        return Ok(result.with_affected(vec![ProviderView::from(current)]));
    }

    let merged = changes.apply_to(&current);
    merged.validate()?;

    let mut updated = merged.into_provider();
    updated.id = id;

    if let Some(other) = store.find_by_name(&updated.name)? {
        if other.id != id {
            return Err(ProviderError::DuplicateName(updated.name));
        }
    }

    let saved = store.update(updated)?;
    result.add_message(CmdMessage::success(format!(
        "Provider updated ({}): {}",
        saved.id, saved.name
    )));
    Ok(result.with_affected(vec![ProviderView::from(saved)]))
}
