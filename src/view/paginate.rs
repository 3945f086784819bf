//! Page slicing over the filtered collection.

use serde::Serialize;

/// Position of a page slice inside the filtered collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageBounds {
    pub start: usize,
    pub end: usize,
    pub total: usize,
    pub page_count: usize,
}

/// Number of non-empty pages for `total` items. Zero when there is nothing to show.
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Highest page index that still shows something (0 when empty).
pub fn last_page(total: usize, page_size: usize) -> usize {
    page_count(total, page_size).saturating_sub(1)
}

/// The slice `[page * page_size, min(page * page_size + page_size, len))`.
///
/// Out-of-range pages and a zero page size produce an empty slice.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], PageBounds) {
    let total = items.len();
    let start = page.saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    let bounds = PageBounds {
        start,
        end,
        total,
        page_count: page_count(total, page_size),
    };

    (&items[start..end], bounds)
}
