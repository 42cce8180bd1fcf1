use crate::core::ids::RecordId;
use crate::validation::{Validatable, ValidationError, ValidationErrors};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// A record type that can be held in a [`RecordStore`](crate::core::store::RecordStore),
/// summarised, searched and sorted.
pub trait Record: Clone + std::fmt::Debug + Validatable {
    const RESOURCE_NAME_SINGULAR: &'static str;
    const RESOURCE_NAME_PLURAL: &'static str;

    fn id(&self) -> &RecordId;

    /// The monetary field summed by the total cost metric.
    fn cost(&self) -> Decimal;

    /// The date reported as "most recent" when this record heads the sequence.
    fn primary_date(&self) -> Option<NaiveDate>;

    /// String-valued fields matched by free text search, in match order.
    #[must_use]
    fn searchable_columns() -> Vec<&'static str> {
        vec![]
    }

    /// The text stored in a searchable column.
    fn text_value(&self, column: &str) -> Option<&str>;

    #[must_use]
    fn sortable_columns() -> Vec<&'static str> {
        vec!["id"]
    }

    /// Typed sort key for a sortable column, or `None` if the column is unknown.
    fn sort_key(&self, column: &str) -> Option<SortKey<'_>> {
        match column {
            "id" => Some(SortKey::Text(self.id().as_str())),
            _ => None,
        }
    }
}

/// Comparable value extracted from a record for sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortKey<'a> {
    Text(&'a str),
    Money(Decimal),
    Integer(i64),
    Date(Option<NaiveDate>),
}

impl SortKey<'_> {
    /// Text compares case-insensitively; absent dates sort before present ones.
    /// Keys of different kinds compare equal so a stable sort keeps their order.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Self::Money(a), Self::Money(b)) => a.cmp(b),
            (Self::Integer(a), Self::Integer(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// A value delivered by a form widget's change event.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Money(Decimal),
    Integer(i64),
}

impl FieldValue {
    /// Whether the widget was cleared. Cleared fields count as absent.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    /// The raw text for string-typed fields; numbers are rendered back to text.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Money(value) => value.to_string(),
            Self::Integer(value) => value.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Money(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

/// Partially filled, uncommitted record behind an "add" form.
///
/// Implementations hold every field as optional and validate each value as it
/// arrives, so a completed draft can only produce in-vocabulary records.
pub trait Draft: Default + Clone + std::fmt::Debug {
    type Target: Record;

    /// Fields that must be present and non-empty before the draft may commit.
    const REQUIRED_FIELDS: &'static [&'static str];

    /// Merge one field into the draft. A blank value clears the field.
    ///
    /// # Errors
    ///
    /// Fails for unknown field names and for values outside a field's
    /// vocabulary or format; the draft is left unchanged.
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError>;

    /// Current value of a field as the form widget should display it.
    fn field_text(&self, name: &str) -> Option<String>;

    /// Whether a required field currently holds a value.
    fn has_field(&self, name: &str) -> bool {
        self.field_text(name).is_some_and(|value| !value.trim().is_empty())
    }

    /// Required fields that are still absent, in declaration order.
    fn missing_fields(&self) -> Vec<&'static str> {
        Self::REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|field| !self.has_field(field))
            .collect()
    }

    /// Synthesize the record, defaulting optional fields.
    ///
    /// # Errors
    ///
    /// Fails if a required field is absent or a value violates a record
    /// invariant (for example a negative cost).
    fn build(self, id: RecordId) -> Result<Self::Target, ValidationErrors>;
}
