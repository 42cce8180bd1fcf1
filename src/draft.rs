//! Draft form buffer: collects field values for a new record, then commits
//! it into a [`RecordStore`] once every required field is present.
//!
//! The buffer also tracks whether its input surface (the "Add Record" dialog)
//! is open. A successful submit closes it and starts a fresh, empty draft.

use crate::core::ids::RecordId;
use crate::core::store::RecordStore;
use crate::core::traits::{Draft, FieldValue};
use crate::errors::CollectionError;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

/// A numeric widget value after parsing.
///
/// Input that does not parse is remembered as typed so the widget can keep
/// showing it; it resolves to zero when the draft commits.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericInput<T> {
    Value(T),
    Invalid(String),
}

impl<T: Copy + Default + ToString> NumericInput<T> {
    /// Value to store in the committed record.
    pub fn resolve(&self, field: &str) -> T {
        match self {
            Self::Value(value) => *value,
            Self::Invalid(raw) => {
                tracing::warn!(field = %field, input = %raw, "Unparseable number stored as zero");
                T::default()
            }
        }
    }

    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Value(value) => value.to_string(),
            Self::Invalid(raw) => raw.clone(),
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

/// Decimal widget input (costs, prices).
#[must_use]
pub fn parse_money(value: FieldValue) -> NumericInput<Decimal> {
    match value {
        FieldValue::Money(amount) => NumericInput::Value(amount),
        FieldValue::Integer(amount) => NumericInput::Value(Decimal::from(amount)),
        FieldValue::Text(text) => Decimal::from_str(text.trim())
            .map_or_else(|_| NumericInput::Invalid(text), NumericInput::Value),
    }
}

/// Integer widget input (mileage, quantity). Fractions are truncated.
#[must_use]
pub fn parse_integer(value: FieldValue) -> NumericInput<i64> {
    match value {
        FieldValue::Integer(amount) => NumericInput::Value(amount),
        FieldValue::Money(amount) => amount
            .trunc()
            .to_i64()
            .map_or_else(|| NumericInput::Invalid(amount.to_string()), NumericInput::Value),
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            if let Ok(amount) = trimmed.parse::<i64>() {
                return NumericInput::Value(amount);
            }
            match Decimal::from_str(trimmed) {
                Ok(amount) => parse_integer(FieldValue::Money(amount)),
                Err(_) => NumericInput::Invalid(text),
            }
        }
    }
}

/// Editing state for one "add record" form.
#[derive(Debug, Clone, Default)]
pub struct DraftForm<D: Draft> {
    draft: D,
    open: bool,
}

impl<D: Draft> DraftForm<D> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            draft: D::default(),
            open: false,
        }
    }

    /// Show the input surface. Values typed before a cancel are still there.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the input surface without discarding the draft.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn draft(&self) -> &D {
        &self.draft
    }

    /// Discard every field value.
    pub fn reset(&mut self) {
        self.draft = D::default();
    }

    /// Merge one field into the draft without validating any other field.
    ///
    /// # Errors
    ///
    /// `Validation` for an unknown field or an out-of-vocabulary value; the
    /// draft keeps its previous value for that field.
    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), CollectionError> {
        self.draft.set_field(name, value.into()).map_err(|error| {
            let error = CollectionError::from(error);
            error.log();
            error
        })
    }

    /// The field's current value as its widget should display it.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<String> {
        self.draft.field_text(name)
    }

    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.draft.missing_fields()
    }

    /// Whether the submit affordance should be enabled.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Commit the draft into `store`.
    ///
    /// On success the new record heads the store, the draft is emptied and
    /// the input surface closes.
    ///
    /// # Errors
    ///
    /// `IncompleteDraft` when a required field is absent, `Validation` when a
    /// value breaks a record invariant. In both cases neither the store nor
    /// the draft changes.
    pub fn submit(
        &mut self,
        store: &mut RecordStore<D::Target>,
    ) -> Result<RecordId, CollectionError> {
        let result = self.commit(store);
        if let Err(error) = &result {
            error.log();
        }
        result
    }

    fn commit(&mut self, store: &mut RecordStore<D::Target>) -> Result<RecordId, CollectionError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(CollectionError::IncompleteDraft(missing));
        }

        let id = RecordId::generate();
        let record = self.draft.clone().build(id.clone())?;
        store.append(record)?;

        self.draft = D::default();
        self.open = false;
        Ok(id)
    }
}
