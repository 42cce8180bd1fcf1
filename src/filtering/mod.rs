//! # Search & Sort
//!
//! Turns a record sequence into the view a list renders: a free text search
//! narrows it, an optional sort reorders what is left.
//!
//! ```rust,ignore
//! let view = apply_view(store.all(), "perf", Some(&SortConfig::new("name", SortDirection::Asc)));
//! ```
//!
//! Searching is a binary include/exclude over the record type's
//! [`searchable_columns`](crate::core::traits::Record::searchable_columns):
//! no tokenization, no ranking, and the source order is kept.

pub mod search;
pub mod sort;

pub use search::{MAX_SEARCH_QUERY_LENGTH, filter_records, filter_records_with_limit};
pub use sort::{SortConfig, SortDirection, sort_records};

use crate::core::traits::Record;

/// Filter by `term`, then sort if a config is given.
#[must_use]
pub fn apply_view<'a, R: Record>(
    records: &'a [R],
    term: &str,
    sort: Option<&SortConfig>,
) -> Vec<&'a R> {
    apply_view_with_limit(records, term, sort, MAX_SEARCH_QUERY_LENGTH)
}

/// [`apply_view`] with the search term capped at `max_len` bytes.
#[must_use]
pub fn apply_view_with_limit<'a, R: Record>(
    records: &'a [R],
    term: &str,
    sort: Option<&SortConfig>,
    max_len: usize,
) -> Vec<&'a R> {
    let mut view = filter_records_with_limit(records, term, max_len);
    if let Some(config) = sort {
        sort_records(&mut view, config);
    }
    view
}
