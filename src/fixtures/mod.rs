//! Seed data used in place of persisted storage.

use crate::core::store::RecordStore;
use crate::core::traits::Record;
use crate::errors::CollectionError;
use crate::models::{MaintenanceRecord, Part};
use serde::de::DeserializeOwned;

const MAINTENANCE_JSON: &str = include_str!("maintenance.json");
const PARTS_JSON: &str = include_str!("parts.json");

/// Parse a JSON array of records and seed a validated store from it.
///
/// # Errors
///
/// `Fixture` for malformed JSON; `Validation` or `DuplicateId` if a record
/// breaks an invariant.
pub fn store_from_json<R>(json: &str) -> Result<RecordStore<R>, CollectionError>
where
    R: Record + DeserializeOwned,
{
    let records: Vec<R> = serde_json::from_str(json)
        .map_err(|source| CollectionError::fixture(R::RESOURCE_NAME_PLURAL, source))?;
    RecordStore::new(records)
}

/// The three seeded service history entries, newest first.
///
/// # Errors
///
/// Only if the embedded data has been edited into an invalid state.
pub fn maintenance_records() -> Result<RecordStore<MaintenanceRecord>, CollectionError> {
    store_from_json(MAINTENANCE_JSON)
}

/// The three seeded parts of the engine performance build.
///
/// # Errors
///
/// Only if the embedded data has been edited into an invalid state.
pub fn parts() -> Result<RecordStore<Part>, CollectionError> {
    store_from_json(PARTS_JSON)
}
