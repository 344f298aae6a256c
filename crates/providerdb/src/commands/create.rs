use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{NewProvider, ProviderView};
use crate::store::DataStore;

/// Validate `input` and insert it, rejecting names already taken (ignoring case).
/// The uniqueness check and the insert share one store lock.
pub fn run<S: DataStore>(store: &S, input: NewProvider) -> Result<CmdResult> {
    input.validate()?;

    let saved = store
        .save_if_name_absent(input.into_provider())
        .inspect_err(|e| tracing::warn!(error = %e, "create rejected"))?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Provider created ({}): {}",
        saved.id, saved.name
    )));
    Ok(result.with_affected(vec![ProviderView::from(saved)]))
}
