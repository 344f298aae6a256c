//! # Pagination
//!
//! Listing never streams the collection. The store materializes the full
//! collection and [`paginate`] cuts a page out of it, together with the
//! navigation flags a client needs to render "previous / next" controls.
//!
//! Pages are zero-based. For `total_items` records and a page size `size`:
//!
//! ```text
//! total_pages  = ceil(total_items / size)      (0 when there are no items)
//! start        = page * size
//! end          = min(start + size, total_items)
//! has_next     = page < total_pages - 1
//! has_previous = page > 0
//! is_first     = page == 0
//! is_last      = page >= total_pages - 1
//! ```
//!
//! A page past the end is not an error: it simply has no items. With no items at
//! all, every page is both first and last.
//!
//! Page size validation happens upstream (see `commands::list`). `paginate`
//! tolerates a zero size by reporting zero pages instead of dividing by zero.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(page: usize, size: usize) -> Self {
        Self { page, size }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_size: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub is_first: bool,
    pub is_last: bool,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Cut `request.page` out of `all`, projecting each item with `project`.
pub fn paginate<T, U>(all: &[T], request: PageRequest, project: impl Fn(&T) -> U) -> Page<U> {
    let PageRequest { page, size } = request;
    let total_items = all.len();
    let total_pages = if size == 0 {
        0
    } else {
        total_items.div_ceil(size)
    };

    let start = page.saturating_mul(size);
    let items = if start < total_items {
        let end = start.saturating_add(size).min(total_items);
        all[start..end].iter().map(project).collect()
    } else {
        Vec::new()
    };

    // `page < total_pages - 1` and `page >= total_pages - 1`, kept in unsigned
    // arithmetic: with zero pages the "last" bound is -1.
    let has_next = page.saturating_add(1) < total_pages;
    let is_last = page.saturating_add(1) >= total_pages;

    tracing::debug!(page, size, total_items, returned = items.len(), "computed page");

    Page {
        items,
        total_items,
        total_pages,
        current_page: page,
        page_size: size,
        has_next,
        has_previous: page > 0,
        is_first: page == 0,
        is_last,
    }
}
