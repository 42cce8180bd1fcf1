//! Validation Support
//!
//! Records are checked when they enter a [`RecordStore`](crate::core::store::RecordStore),
//! either from fixture data or from a committed draft. Implement [`Validatable`]
//! on a record type to describe the invariants its fields must satisfy.
//!
//! # Example
//!
//! ```rust,ignore
//! use garagecrate::validation::{Validatable, ValidationErrors, validators};
//!
//! impl Validatable for Tyre {
//!     fn validate(&self) -> Result<(), ValidationErrors> {
//!         let mut errors = ValidationErrors::new();
//!         errors.check(validators::validate_required("brand", &self.brand));
//!         errors.check(validators::validate_non_negative("price", self.price));
//!         errors.result()
//!     }
//! }
//! ```

use serde::Serialize;
use std::fmt;

/// Validation error with field name and message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// The field that failed validation
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Record the outcome of a single validator, keeping only failures.
    pub fn check(&mut self, outcome: Result<(), ValidationError>) {
        if let Err(error) = outcome {
            self.add(error);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Whether any error was reported against `field`.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Convert to Result
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one error was collected.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Trait for records whose invariants are checked before they are stored.
pub trait Validatable {
    /// # Errors
    ///
    /// Returns every violated invariant, not just the first one.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Helper validators for common patterns
pub mod validators {
    use super::ValidationError;
    use rust_decimal::Decimal;
    use std::fmt;

    /// Validate value is not empty
    ///
    /// # Errors
    ///
    /// Fails for empty or whitespace-only input.
    pub fn validate_required(field: &str, value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new(field, "This field is required"));
        }
        Ok(())
    }

    /// Monetary amounts may be zero but never negative.
    ///
    /// # Errors
    ///
    /// Fails when `value` is below zero.
    pub fn validate_non_negative(field: &str, value: Decimal) -> Result<(), ValidationError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(ValidationError::new(field, "Must not be negative"));
        }
        Ok(())
    }

    /// Validate number is within range
    ///
    /// # Errors
    ///
    /// Fails when `value` is outside the inclusive bounds that were given.
    pub fn validate_range<T: PartialOrd + fmt::Display>(
        field: &str,
        value: T,
        min: Option<T>,
        max: Option<T>,
    ) -> Result<(), ValidationError> {
        if let Some(min_val) = min {
            if value < min_val {
                return Err(ValidationError::new(
                    field,
                    format!("Must be at least {min_val}"),
                ));
            }
        }

        if let Some(max_val) = max {
            if value > max_val {
                return Err(ValidationError::new(
                    field,
                    format!("Must be at most {max_val}"),
                ));
            }
        }

        Ok(())
    }
}
