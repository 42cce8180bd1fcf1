//! Aggregate metrics over a record sequence.
//!
//! Nothing is cached: a [`Summary`] borrows the current slice and every metric
//! is recomputed when asked for. All metrics are total over an empty slice.

use crate::core::traits::Record;
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy)]
pub struct Summary<'a, R: Record> {
    records: &'a [R],
}

impl<'a, R: Record> Summary<'a, R> {
    #[must_use]
    pub fn of(records: &'a [R]) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Sum of each record's monetary field; zero for an empty sequence.
    ///
    /// A sum beyond the range of `Decimal` is reported as `Decimal::MAX`.
    #[must_use]
    pub fn total_cost(&self) -> Decimal {
        self.records
            .iter()
            .try_fold(Decimal::ZERO, |total, record| total.checked_add(record.cost()))
            .unwrap_or_else(|| {
                tracing::warn!(
                    resource = R::RESOURCE_NAME_PLURAL,
                    count = self.records.len(),
                    "Total cost overflowed; reporting the maximum"
                );
                Decimal::MAX
            })
    }

    /// Date of the first record. The sequence is newest-first by
    /// construction and is not re-sorted here.
    #[must_use]
    pub fn most_recent_date(&self) -> Option<NaiveDate> {
        self.records.first().and_then(Record::primary_date)
    }

    #[must_use]
    pub fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&R) -> bool,
    {
        self.records.iter().filter(|record| predicate(record)).count()
    }

    /// The first `n` records, fewer if the sequence is shorter.
    #[must_use]
    pub fn recent(&self, n: usize) -> &'a [R] {
        &self.records[..n.min(self.records.len())]
    }
}
