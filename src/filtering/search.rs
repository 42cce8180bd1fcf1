use crate::core::traits::Record;

// Basic safety limit
pub const MAX_SEARCH_QUERY_LENGTH: usize = 10_000;

/// Cap a search term at `max_len` bytes without splitting a character.
#[must_use]
pub fn truncate_query(query: &str, max_len: usize) -> &str {
    if query.len() <= max_len {
        return query;
    }
    let mut end = max_len;
    while !query.is_char_boundary(end) {
        end -= 1;
    }
    &query[..end]
}

/// Case-insensitive substring match against every searchable column of `record`.
#[must_use]
pub fn matches<R: Record>(record: &R, needle_lower: &str) -> bool {
    R::searchable_columns().into_iter().any(|column| {
        record
            .text_value(column)
            .is_some_and(|value| value.to_lowercase().contains(needle_lower))
    })
}

/// Free text filter over a record sequence.
///
/// An empty term keeps every record. Otherwise a record is kept when the term
/// is a case-insensitive substring of any searchable column. Order is preserved.
#[must_use]
pub fn filter_records<'a, R: Record>(records: &'a [R], term: &str) -> Vec<&'a R> {
    filter_records_with_limit(records, term, MAX_SEARCH_QUERY_LENGTH)
}

#[must_use]
pub fn filter_records_with_limit<'a, R: Record>(
    records: &'a [R],
    term: &str,
    max_len: usize,
) -> Vec<&'a R> {
    let term = truncate_query(term, max_len);
    if term.is_empty() {
        return records.iter().collect();
    }

    let needle = term.to_lowercase();
    let filtered: Vec<&R> = records
        .iter()
        .filter(|record| matches(*record, &needle))
        .collect();

    tracing::debug!(
        resource = R::RESOURCE_NAME_PLURAL,
        total = records.len(),
        matched = filtered.len(),
        "Applied search filter"
    );
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_queries_pass_through() {
        assert_eq!(truncate_query("perf", 10), "perf");
    }

    #[test]
    fn test_search_query_length_limit() {
        let very_long_query = "a".repeat(20_000);
        let sanitized = truncate_query(&very_long_query, MAX_SEARCH_QUERY_LENGTH);
        assert_eq!(sanitized.len(), MAX_SEARCH_QUERY_LENGTH);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // "⚙" is three bytes, so a two byte cap must drop it entirely
        assert_eq!(truncate_query("⚙x", 2), "");
        assert_eq!(truncate_query("a⚙", 3), "a");
    }
}
