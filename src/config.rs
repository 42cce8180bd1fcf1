use crate::errors::CollectionError;
use crate::filtering::{MAX_SEARCH_QUERY_LENGTH, SortConfig};
use serde::Deserialize;

/// Settings shared by the page view models.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```json
/// {"recent_window": 5, "default_sort": {"column": "name", "direction": "ASC"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// How many records the "recent" list shows.
    pub recent_window: usize,
    /// Search terms longer than this are truncated.
    pub max_search_length: usize,
    /// Shown when there is no most-recent date.
    pub missing_date_label: String,
    /// Shown in place of a number that failed to parse.
    pub invalid_number_label: String,
    /// Sort applied to list views when the user has not picked one.
    pub default_sort: Option<SortConfig>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            recent_window: 3,
            max_search_length: MAX_SEARCH_QUERY_LENGTH,
            missing_date_label: "N/A".to_string(),
            invalid_number_label: "—".to_string(),
            default_sort: None,
        }
    }
}

impl ViewConfig {
    /// # Errors
    ///
    /// Returns `CollectionError::Config` for malformed JSON or unknown keys.
    pub fn from_json_str(json: &str) -> Result<Self, CollectionError> {
        serde_json::from_str(json).map_err(CollectionError::Config)
    }
}
