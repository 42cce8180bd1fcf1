//! # Error Handling for Record Collections
//!
//! Every fallible operation in this crate returns [`CollectionError`]. The
//! error carries enough context to be shown next to the offending form or
//! list, and [`CollectionError::log`] forwards the details to `tracing` so
//! applications that install a subscriber can see why a mutation was refused.
//!
//! ## Logging
//!
//! Nothing is printed unless the application installs a subscriber:
//!
//! ```rust,ignore
//! tracing_subscriber::fmt()
//!     .with_target(false)
//!     .compact()
//!     .init();
//! ```

use crate::core::ids::RecordId;
use crate::validation::{ValidationError, ValidationErrors};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectionError {
    /// No record with this id exists in the store.
    #[error("{resource} with ID '{id}' not found")]
    NotFound {
        resource: &'static str,
        id: RecordId,
    },

    /// A record with this id is already stored.
    #[error("{resource} with ID '{id}' already exists")]
    DuplicateId {
        resource: &'static str,
        id: RecordId,
    },

    /// One or more fields violate the record's invariants.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// A draft was submitted before every required field was filled in.
    #[error("Missing required fields: {}", .0.join(", "))]
    IncompleteDraft(Vec<&'static str>),

    /// Embedded seed data could not be parsed.
    #[error("Failed to load {resource} fixtures: {source}")]
    Fixture {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid view configuration: {0}")]
    Config(#[source] serde_json::Error),
}

impl CollectionError {
    pub fn not_found(resource: &'static str, id: RecordId) -> Self {
        Self::NotFound { resource, id }
    }

    pub fn duplicate_id(resource: &'static str, id: RecordId) -> Self {
        Self::DuplicateId { resource, id }
    }

    pub fn fixture(resource: &'static str, source: serde_json::Error) -> Self {
        Self::Fixture { resource, source }
    }

    /// Field-level errors, if this error was caused by validation.
    #[must_use]
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }

    /// Whether this is the draft guard refusing an incomplete submission.
    #[must_use]
    pub fn is_incomplete_draft(&self) -> bool {
        matches!(self, Self::IncompleteDraft(_))
    }

    /// Forward the error details to `tracing`.
    ///
    /// Guard rejections are expected during normal editing and log at debug
    /// level; everything else indicates bad data and logs at warn level.
    pub fn log(&self) {
        match self {
            Self::IncompleteDraft(missing) => {
                tracing::debug!(missing = ?missing, "Draft submission ignored");
            }
            Self::Validation(errors) => {
                tracing::warn!(count = errors.len(), errors = %errors, "Record failed validation");
            }
            Self::Fixture { resource, source } => {
                tracing::warn!(resource = %resource, error = %source, "Fixture data rejected");
            }
            _ => {
                tracing::warn!(error = %self, "Collection operation failed");
            }
        }
    }
}

impl From<ValidationError> for CollectionError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error.into())
    }
}
