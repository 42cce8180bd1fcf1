use crate::config::ViewConfig;
use crate::core::ids::{RecordId, VehicleId};
use crate::core::store::RecordStore;
use crate::core::traits::FieldValue;
use crate::draft::DraftForm;
use crate::errors::CollectionError;
use crate::filtering::{SortConfig, apply_view_with_limit};
use crate::models::maintenance::DATE_FORMAT;
use crate::models::{MaintenanceDraft, MaintenanceRecord};
use crate::presentation::{format_currency, format_draft_amount, format_mileage};
use crate::summary::Summary;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Headline metrics for the service history page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceSummary {
    pub total_records: usize,
    pub total_cost: Decimal,
    pub last_service: Option<NaiveDate>,
    pub overdue_items: usize,
}

impl MaintenanceSummary {
    #[must_use]
    pub fn total_cost_label(&self) -> String {
        format_currency(self.total_cost)
    }

    #[must_use]
    pub fn last_service_label(&self, config: &ViewConfig) -> String {
        self.last_service.map_or_else(
            || config.missing_date_label.clone(),
            |date| date.format(DATE_FORMAT).to_string(),
        )
    }
}

/// Display-ready fields of one record card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaintenanceCard {
    pub id: RecordId,
    pub icon: &'static str,
    pub description: String,
    pub badge_label: &'static str,
    pub badge_class: &'static str,
    pub date: String,
    pub cost: String,
    pub mileage: String,
    pub technician: String,
    pub location: Option<String>,
    pub next_due: Option<String>,
    pub notes: Option<String>,
}

impl From<&MaintenanceRecord> for MaintenanceCard {
    fn from(record: &MaintenanceRecord) -> Self {
        Self {
            id: record.id.clone(),
            icon: record.category.icon(),
            description: record.description.clone(),
            badge_label: record.service_type.as_str(),
            badge_class: record.service_type.color().class(),
            date: record.date.format(DATE_FORMAT).to_string(),
            cost: format_currency(record.cost),
            mileage: format_mileage(record.mileage),
            technician: record.technician.clone(),
            location: Some(record.location.clone()).filter(|location| !location.is_empty()),
            next_due: record
                .next_due
                .map(|date| date.format(DATE_FORMAT).to_string()),
            notes: record.notes.clone().filter(|notes| !notes.is_empty()),
        }
    }
}

/// View model behind `/maintenance/:vehicleId`.
#[derive(Debug, Clone)]
pub struct MaintenanceLog {
    vehicle_id: VehicleId,
    records: RecordStore<MaintenanceRecord>,
    form: DraftForm<MaintenanceDraft>,
    search: String,
    sort: Option<SortConfig>,
    config: ViewConfig,
}

impl MaintenanceLog {
    #[must_use]
    pub fn new(
        vehicle_id: VehicleId,
        records: RecordStore<MaintenanceRecord>,
        config: ViewConfig,
    ) -> Self {
        let sort = config.default_sort.clone();
        Self {
            vehicle_id,
            records,
            form: DraftForm::new(),
            search: String::new(),
            sort,
            config,
        }
    }

    /// A page seeded with the built-in service history.
    ///
    /// # Errors
    ///
    /// Only if the embedded fixtures are invalid.
    #[cfg(feature = "fixtures")]
    pub fn from_fixtures(vehicle_id: VehicleId) -> Result<Self, CollectionError> {
        Ok(Self::new(
            vehicle_id,
            crate::fixtures::maintenance_records()?,
            ViewConfig::default(),
        ))
    }

    #[must_use]
    pub fn vehicle_id(&self) -> &VehicleId {
        &self.vehicle_id
    }

    #[must_use]
    pub fn records(&self) -> &[MaintenanceRecord] {
        self.records.all()
    }

    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    #[must_use]
    pub fn summary(&self, today: NaiveDate) -> MaintenanceSummary {
        let summary = Summary::of(self.records.all());
        MaintenanceSummary {
            total_records: summary.count(),
            total_cost: summary.total_cost(),
            last_service: summary.most_recent_date(),
            overdue_items: summary.overdue_count(today),
        }
    }

    /// The newest few records, as many as the configured window allows.
    #[must_use]
    pub fn recent_records(&self) -> &[MaintenanceRecord] {
        Summary::of(self.records.all()).recent(self.config.recent_window)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        self.sort = sort;
    }

    /// Records after search and sort, in display order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&MaintenanceRecord> {
        apply_view_with_limit(
            self.records.all(),
            &self.search,
            self.sort.as_ref(),
            self.config.max_search_length,
        )
    }

    #[must_use]
    pub fn cards(&self) -> Vec<MaintenanceCard> {
        self.visible_records()
            .into_iter()
            .map(MaintenanceCard::from)
            .collect()
    }

    #[must_use]
    pub fn form(&self) -> &DraftForm<MaintenanceDraft> {
        &self.form
    }

    pub fn open_form(&mut self) {
        self.form.open();
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    /// The draft cost as currency, the configured invalid label if it does not
    /// parse, or empty while unset.
    #[must_use]
    pub fn cost_preview(&self) -> String {
        format_draft_amount(
            self.form.value("cost").as_deref(),
            &self.config.invalid_number_label,
        )
    }

    /// # Errors
    ///
    /// See [`DraftForm::set_field`].
    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), CollectionError> {
        self.form.set_field(name, value)
    }

    /// Commit the add-record form; the new record appears first.
    ///
    /// # Errors
    ///
    /// See [`DraftForm::submit`]. The page is unchanged on error.
    pub fn submit_record(&mut self) -> Result<RecordId, CollectionError> {
        let id = self.form.submit(&mut self.records)?;
        tracing::debug!(vehicle = %self.vehicle_id, id = %id, "Maintenance record added");
        Ok(id)
    }
}
