use crate::core::traits::Record;
use serde::{Deserialize, Serialize};

// Shared default values
const DEFAULT_SORT_ORDER: &str = "ASC";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Column and direction for ordering a filtered view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub column: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortConfig {
    #[must_use]
    pub fn new(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column: column.into(),
            direction,
        }
    }

    /// Parse either a JSON array `["column", "ASC"]` or a bare column name
    /// paired with an optional `order`. Returns `None` when no column is given.
    #[must_use]
    pub fn parse(sort: &str, order: Option<&str>) -> Option<Self> {
        let sort = sort.trim();
        let (column, sort_order) = if sort.starts_with('[') {
            parse_json_sort(sort)?
        } else {
            (sort.to_string(), order.unwrap_or(DEFAULT_SORT_ORDER).to_string())
        };

        if column.is_empty() {
            return None;
        }
        Some(Self::new(column, parse_order(&sort_order)))
    }
}

/// Parse sort column and order from JSON array format
fn parse_json_sort(json: &str) -> Option<(String, String)> {
    let sort_vec: Vec<String> = serde_json::from_str(json).ok()?;
    Some((
        sort_vec.first().cloned()?,
        sort_vec
            .get(1)
            .cloned()
            .unwrap_or(DEFAULT_SORT_ORDER.to_string()),
    ))
}

/// Convert sort order string to a direction
fn parse_order(sort_order: &str) -> SortDirection {
    if sort_order.eq_ignore_ascii_case("DESC") {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    }
}

/// Stable sort of a view by a sortable column.
///
/// A column the record type does not declare sortable leaves the view in its
/// original order.
pub fn sort_records<R: Record>(records: &mut [&R], config: &SortConfig) {
    if !R::sortable_columns().contains(&config.column.as_str()) {
        tracing::debug!(
            resource = R::RESOURCE_NAME_PLURAL,
            column = %config.column,
            "Ignoring sort on unknown column"
        );
        return;
    }

    records.sort_by(|a, b| {
        let ordering = match (a.sort_key(&config.column), b.sort_key(&config.column)) {
            (Some(left), Some(right)) => left.compare(&right),
            _ => std::cmp::Ordering::Equal,
        };
        match config.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}
