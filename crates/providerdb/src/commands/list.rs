use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ProviderError, Result};
use crate::model::ProviderView;
use crate::pagination::{paginate, PageRequest};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, page: usize, size: usize) -> Result<CmdResult> {
    if size == 0 {
        return Err(ProviderError::Validation(
            "page size must be greater than zero".to_string(),
        ));
    }

    let all = store.find_all()?;
    let page = paginate(&all, PageRequest::new(page, size), |p| ProviderView::from(p));

    let mut result = CmdResult::default();
    if page.total_items == 0 {
        result.add_message(CmdMessage::info("No providers yet"));
    } else if page.is_empty() {
        result.add_message(CmdMessage::warning(format!(
            "Page {} is past the end ({} pages)",
            page.current_page, page.total_pages
        )));
    }

    Ok(result.with_listed(page.items.clone()).with_page(page))
}
