use crate::core::ids::RecordId;
use crate::core::traits::Record;
use crate::errors::CollectionError;
use std::collections::HashSet;

/// Ordered, most-recent-first sequence of records of one type.
///
/// Each page view owns its own store; nothing is shared between pages.
/// Every record is validated on the way in and ids stay unique.
#[derive(Debug, Clone)]
pub struct RecordStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: Record> RecordStore<R> {
    /// Seed a store, keeping the seed's order.
    ///
    /// # Errors
    ///
    /// Fails on the first record that violates its invariants or repeats an id.
    pub fn new(seed: Vec<R>) -> Result<Self, CollectionError> {
        let mut seen = HashSet::with_capacity(seed.len());
        for record in &seed {
            record.validate()?;
            if !seen.insert(record.id()) {
                return Err(CollectionError::duplicate_id(
                    R::RESOURCE_NAME_SINGULAR,
                    record.id().clone(),
                ));
            }
        }
        tracing::debug!(
            resource = R::RESOURCE_NAME_PLURAL,
            count = seed.len(),
            "Seeded record store"
        );
        Ok(Self { records: seed })
    }

    /// Prepend a record so the sequence stays newest-first.
    ///
    /// # Errors
    ///
    /// Fails without modifying the store if the record is invalid or its id
    /// is already present.
    pub fn append(&mut self, record: R) -> Result<(), CollectionError> {
        record.validate()?;
        if self.contains(record.id()) {
            return Err(CollectionError::duplicate_id(
                R::RESOURCE_NAME_SINGULAR,
                record.id().clone(),
            ));
        }
        tracing::debug!(
            resource = R::RESOURCE_NAME_SINGULAR,
            id = %record.id(),
            "Appended record"
        );
        self.records.insert(0, record);
        Ok(())
    }

    /// Read-only view of the records in store order.
    #[must_use]
    pub fn all(&self) -> &[R] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: &RecordId) -> bool {
        self.records.iter().any(|record| record.id() == id)
    }

    #[must_use]
    pub fn get(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Apply `edit` to a copy of the record and store it in place if the
    /// result still validates. The record keeps its position and its id.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, `Validation` if the edited record is
    /// invalid. The store is unchanged on error.
    pub fn update<F>(&mut self, id: &RecordId, edit: F) -> Result<&R, CollectionError>
    where
        F: FnOnce(&mut R),
    {
        let position = self.position(id)?;
        let mut edited = self.records[position].clone();
        edit(&mut edited);
        if edited.id() != id {
            return Err(CollectionError::from(crate::validation::ValidationError::new(
                "id",
                "Record ids cannot be changed",
            )));
        }
        edited.validate()?;
        self.records[position] = edited;
        tracing::debug!(resource = R::RESOURCE_NAME_SINGULAR, id = %id, "Updated record");
        Ok(&self.records[position])
    }

    /// Remove and return a record.
    ///
    /// # Errors
    ///
    /// `NotFound` if no record has this id.
    pub fn remove(&mut self, id: &RecordId) -> Result<R, CollectionError> {
        let position = self.position(id)?;
        tracing::debug!(resource = R::RESOURCE_NAME_SINGULAR, id = %id, "Removed record");
        Ok(self.records.remove(position))
    }

    fn position(&self, id: &RecordId) -> Result<usize, CollectionError> {
        self.records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| CollectionError::not_found(R::RESOURCE_NAME_SINGULAR, id.clone()))
    }
}

impl<'a, R: Record> IntoIterator for &'a RecordStore<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
