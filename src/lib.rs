//! # garagecrate
//!
//! View models for a vehicle garage tracker: service history per vehicle and
//! the parts list of a build plan.
//!
//! Every page follows the same pattern, implemented once here:
//!
//! - a [`RecordStore`] seeded with records, newest first, growing by prepend
//! - a [`Summary`] computed from the current records on every read
//! - a free text [search](filtering) that narrows the list, optionally sorted
//! - a [`DraftForm`] collecting a new record until its required fields are set
//! - [presentation](presentation) lookups from enumerated fields to colors and icons
//!
//! ```rust,ignore
//! use garagecrate::{PartsCatalog, BuildId};
//!
//! let mut catalog = PartsCatalog::from_fixtures(BuildId::new("engine-upgrade"))?;
//! catalog.set_search("perf");
//! assert_eq!(catalog.visible_parts().len(), 2);
//! ```

pub mod config;
pub mod core;
pub mod draft;
pub mod errors;
#[cfg(feature = "fixtures")]
pub mod fixtures;
pub mod filtering;
pub mod models;
pub mod presentation;
pub mod summary;
pub mod validation;
pub mod views;

pub use config::ViewConfig;
pub use crate::core::{BuildId, Draft, FieldValue, Record, RecordId, RecordStore, SortKey, VehicleId};
pub use draft::DraftForm;
pub use errors::CollectionError;
pub use filtering::{SortConfig, SortDirection, apply_view};
pub use models::{
    MaintenanceDraft, MaintenanceRecord, Part, PartDraft, PartStatus, ServiceCategory,
    ServiceStatus, ServiceType,
};
pub use summary::Summary;
pub use validation::{Validatable, ValidationError, ValidationErrors};
pub use views::{MaintenanceLog, PartsCatalog};
