//! Free-text filtering for list items.
//!
//! Case-insensitive substring match over title, description and tags.
//! Matching any one field is enough.

use crate::model::Listable;

/// Whether `item` matches `query`. An empty query matches everything.
pub fn matches<T: Listable>(item: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    matches_lowered(item, &query.to_lowercase())
}

/// Same as [`matches`] with the query already lowercased
pub(crate) fn matches_lowered<T: Listable>(item: &T, needle: &str) -> bool {
    item.title().to_lowercase().contains(needle)
        || item.description().to_lowercase().contains(needle)
        || item
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Filter items by query, preserving source order.
pub fn filter_items<'a, T: Listable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.is_empty() {
        return items.iter().collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches_lowered(*item, &needle))
        .collect()
}
