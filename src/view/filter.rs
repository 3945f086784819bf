//! Category and free-text filtering.

use super::{Category, Record};

/// Records matching both `category` and `query`, in collection order.
///
/// The query is a case-insensitive substring match against any of the record's
/// search fields; an empty query matches everything.
pub fn filter_records<'a, R: Record>(
    records: &'a [R],
    category: R::Category,
    query: &str,
) -> Vec<&'a R> {
    let needle = query.to_lowercase();

    records
        .iter()
        .filter(|record| matches_category(*record, category) && matches_text(*record, &needle))
        .collect()
}

pub fn matches_category<R: Record>(record: &R, category: R::Category) -> bool {
    category.is_all() || record.in_category(category)
}

/// `needle` must already be lowercased.
fn matches_text<R: Record>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    record
        .search_fields()
        .into_iter()
        .filter(|field| !field.is_empty())
        .any(|field| field.to_lowercase().contains(needle))
}
