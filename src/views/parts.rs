use crate::config::ViewConfig;
use crate::core::ids::{BuildId, RecordId};
use crate::core::store::RecordStore;
use crate::core::traits::FieldValue;
use crate::draft::DraftForm;
use crate::errors::CollectionError;
use crate::filtering::{SortConfig, apply_view_with_limit};
use crate::models::maintenance::DATE_FORMAT;
use crate::models::{Part, PartDraft};
use crate::presentation::{format_draft_amount, format_price, notes_or_placeholder};
use crate::summary::Summary;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartsSummary {
    pub total_parts: usize,
    pub total_cost: Decimal,
    pub installed: usize,
    /// Pending or ordered.
    pub pending: usize,
}

impl PartsSummary {
    #[must_use]
    pub fn total_cost_label(&self) -> String {
        format_price(self.total_cost)
    }
}

/// Display-ready fields of one part card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartCard {
    pub id: RecordId,
    pub name: String,
    pub badge_label: &'static str,
    pub badge_class: &'static str,
    pub part_number: String,
    pub brand: String,
    pub category: String,
    pub warranty: String,
    pub quantity: u32,
    pub unit_price: String,
    pub total_price: String,
    pub supplier: String,
    pub order_date: Option<String>,
    pub delivery_date: Option<String>,
    pub notes: String,
}

impl From<&Part> for PartCard {
    fn from(part: &Part) -> Self {
        Self {
            id: part.id.clone(),
            name: part.name.clone(),
            badge_label: part.status.as_str(),
            badge_class: part.status.color().class(),
            part_number: part.part_number.clone(),
            brand: part.brand.clone(),
            category: part.category.clone(),
            warranty: part.warranty.clone(),
            quantity: part.quantity,
            unit_price: format_price(part.unit_price),
            total_price: format_price(part.total_price),
            supplier: part.supplier.clone(),
            order_date: part.order_date.map(|date| date.format(DATE_FORMAT).to_string()),
            delivery_date: part
                .delivery_date
                .map(|date| date.format(DATE_FORMAT).to_string()),
            notes: notes_or_placeholder(part.notes.as_deref()).to_string(),
        }
    }
}

/// View model behind `/builds/:buildId/parts`.
#[derive(Debug, Clone)]
pub struct PartsCatalog {
    build_id: BuildId,
    parts: RecordStore<Part>,
    form: DraftForm<PartDraft>,
    search: String,
    sort: Option<SortConfig>,
    config: ViewConfig,
}

impl PartsCatalog {
    #[must_use]
    pub fn new(build_id: BuildId, parts: RecordStore<Part>, config: ViewConfig) -> Self {
        let sort = config.default_sort.clone();
        Self {
            build_id,
            parts,
            form: DraftForm::new(),
            search: String::new(),
            sort,
            config,
        }
    }

    /// A page seeded with the built-in engine build parts.
    ///
    /// # Errors
    ///
    /// Only if the embedded fixtures are invalid.
    #[cfg(feature = "fixtures")]
    pub fn from_fixtures(build_id: BuildId) -> Result<Self, CollectionError> {
        Ok(Self::new(build_id, crate::fixtures::parts()?, ViewConfig::default()))
    }

    #[must_use]
    pub fn build_id(&self) -> &BuildId {
        &self.build_id
    }

    #[must_use]
    pub fn parts(&self) -> &[Part] {
        self.parts.all()
    }

    /// Metrics over every part, regardless of the current search.
    #[must_use]
    pub fn summary(&self) -> PartsSummary {
        let summary = Summary::of(self.parts.all());
        PartsSummary {
            total_parts: summary.count(),
            total_cost: summary.total_cost(),
            installed: summary.installed_count(),
            pending: summary.outstanding_count(),
        }
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

    /// Parts matching the search term by name, part number or brand.
    #[must_use]
    pub fn visible_parts(&self) -> Vec<&Part> {
        apply_view_with_limit(
            self.parts.all(),
            &self.search,
            self.sort.as_ref(),
            self.config.max_search_length,
        )
    }

    #[must_use]
    pub fn cards(&self) -> Vec<PartCard> {
        self.visible_parts().into_iter().map(PartCard::from).collect()
    }

    #[must_use]
    pub fn form(&self) -> &DraftForm<PartDraft> {
        &self.form
    }

    pub fn open_form(&mut self) {
        self.form.open();
    }

    pub fn cancel_form(&mut self) {
        self.form.cancel();
    }

    #[must_use]
    pub fn unit_price_preview(&self) -> String {
        format_draft_amount(
            self.form.value("unitPrice").as_deref(),
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

    /// # Errors
    ///
    /// See [`DraftForm::submit`].
    pub fn submit_part(&mut self) -> Result<RecordId, CollectionError> {
        let id = self.form.submit(&mut self.parts)?;
        tracing::debug!(build = %self.build_id, id = %id, "Part added");
        Ok(id)
    }

    /// Edit a part in place. Use [`Part::with_quantity`] and
    /// [`Part::with_unit_price`] to keep the total consistent.
    ///
    /// # Errors
    ///
    /// `NotFound` or `Validation`; the part is unchanged on error.
    pub fn update_part<F>(&mut self, id: &RecordId, edit: F) -> Result<&Part, CollectionError>
    where
        F: FnOnce(&mut Part),
    {
        self.parts.update(id, edit).inspect_err(CollectionError::log)
    }

    /// # Errors
    ///
    /// `NotFound` if the part does not exist.
    pub fn remove_part(&mut self, id: &RecordId) -> Result<Part, CollectionError> {
        self.parts.remove(id).inspect_err(CollectionError::log)
    }
}
