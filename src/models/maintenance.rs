use crate::core::ids::RecordId;
use crate::core::traits::{Draft, FieldValue, Record, SortKey};
use crate::draft::{NumericInput, parse_integer, parse_money};
use crate::models::vocabulary;
use crate::summary::Summary;
use crate::validation::{Validatable, ValidationError, ValidationErrors, validators};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

vocabulary! {
    /// Kind of service performed.
    pub enum ServiceType {
        Routine => "routine",
        Repair => "repair",
        Inspection => "inspection",
        Emergency => "emergency",
    }
}

vocabulary! {
    /// Vehicle system the service touched.
    pub enum ServiceCategory {
        Engine => "engine",
        Brakes => "brakes",
        Tires => "tires",
        Electrical => "electrical",
        Transmission => "transmission",
        Other => "other",
    }
}

vocabulary! {
    pub enum ServiceStatus {
        Completed => "completed",
        Scheduled => "scheduled",
        InProgress => "in-progress",
    }
}

/// One entry in a vehicle's service history.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: RecordId,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub service_type: ServiceType,
    pub category: ServiceCategory,
    pub description: String,
    pub cost: Decimal,
    pub mileage: u32,
    #[serde(default)]
    pub technician: String,
    #[serde(default)]
    pub location: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub notes: Option<String>,
    pub status: ServiceStatus,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub next_due: Option<NaiveDate>,
}

impl MaintenanceRecord {
    /// Due date has passed and the service has not been done again.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.next_due.is_some_and(|due| due < today)
    }
}

impl Validatable for MaintenanceRecord {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::validate_required("id", self.id.as_str()));
        errors.check(validators::validate_required("description", &self.description));
        errors.check(validators::validate_non_negative("cost", self.cost));
        errors.result()
    }
}

impl Record for MaintenanceRecord {
    const RESOURCE_NAME_SINGULAR: &'static str = "Maintenance record";
    const RESOURCE_NAME_PLURAL: &'static str = "Maintenance records";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn cost(&self) -> Decimal {
        self.cost
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn searchable_columns() -> Vec<&'static str> {
        vec!["description", "technician", "location"]
    }

    fn text_value(&self, column: &str) -> Option<&str> {
        match column {
            "description" => Some(&self.description),
            "technician" => Some(&self.technician),
            "location" => Some(&self.location),
            "notes" => self.notes.as_deref(),
            _ => None,
        }
    }

    fn sortable_columns() -> Vec<&'static str> {
        vec!["id", "date", "type", "category", "description", "cost", "mileage"]
    }

    fn sort_key(&self, column: &str) -> Option<SortKey<'_>> {
        match column {
            "id" => Some(SortKey::Text(self.id.as_str())),
            "date" => Some(SortKey::Date(Some(self.date))),
            "type" => Some(SortKey::Text(self.service_type.as_str())),
            "category" => Some(SortKey::Text(self.category.as_str())),
            "description" => Some(SortKey::Text(&self.description)),
            "cost" => Some(SortKey::Money(self.cost)),
            "mileage" => Some(SortKey::Integer(i64::from(self.mileage))),
            _ => None,
        }
    }
}

impl Summary<'_, MaintenanceRecord> {
    /// Records whose next due date is before `today`.
    #[must_use]
    pub fn overdue_count(&self, today: NaiveDate) -> usize {
        self.count_where(|record| record.is_overdue(today))
    }
}

/// The "Add Maintenance Record" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaintenanceDraft {
    pub date: Option<NaiveDate>,
    pub service_type: Option<ServiceType>,
    pub category: Option<ServiceCategory>,
    pub description: Option<String>,
    pub cost: Option<NumericInput<Decimal>>,
    pub mileage: Option<NumericInput<i64>>,
    pub technician: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

fn parse_vocabulary<T>(field: &str, value: FieldValue) -> Result<T, ValidationError>
where
    T: std::str::FromStr<Err = super::UnknownVariant>,
{
    value
        .into_text()
        .trim()
        .parse()
        .map_err(|error: super::UnknownVariant| ValidationError::new(field, error.to_string()))
}

pub(crate) fn parse_date(field: &str, value: FieldValue) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.into_text().trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::new(field, "Expected a date in YYYY-MM-DD format"))
}

impl Draft for MaintenanceDraft {
    type Target = MaintenanceRecord;

    const REQUIRED_FIELDS: &'static [&'static str] = &["description", "date", "type", "category"];

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError> {
        let blank = value.is_blank();
        match name {
            "date" => self.date = if blank { None } else { Some(parse_date(name, value)?) },
            "type" => {
                self.service_type = if blank { None } else { Some(parse_vocabulary(name, value)?) };
            }
            "category" => {
                self.category = if blank { None } else { Some(parse_vocabulary(name, value)?) };
            }
            "cost" => self.cost = (!blank).then(|| parse_money(value)),
            "mileage" => self.mileage = (!blank).then(|| parse_integer(value)),
            "description" => self.description = (!blank).then(|| value.into_text()),
            "technician" => self.technician = (!blank).then(|| value.into_text()),
            "location" => self.location = (!blank).then(|| value.into_text()),
            "notes" => self.notes = (!blank).then(|| value.into_text()),
            _ => return Err(ValidationError::new(name, "Unknown field")),
        }
        Ok(())
    }

    fn field_text(&self, name: &str) -> Option<String> {
        match name {
            "date" => self.date.map(|date| date.format(DATE_FORMAT).to_string()),
            "type" => self.service_type.map(|value| value.as_str().to_string()),
            "category" => self.category.map(|value| value.as_str().to_string()),
            "cost" => self.cost.as_ref().map(NumericInput::display),
            "mileage" => self.mileage.as_ref().map(NumericInput::display),
            "description" => self.description.clone(),
            "technician" => self.technician.clone(),
            "location" => self.location.clone(),
            "notes" => self.notes.clone(),
            _ => None,
        }
    }

    fn build(self, id: RecordId) -> Result<MaintenanceRecord, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for field in self.missing_fields() {
            errors.add(ValidationError::new(field, "This field is required"));
        }

        let cost = self.cost.map_or(Decimal::ZERO, |cost| cost.resolve("cost"));
        errors.check(validators::validate_non_negative("cost", cost));

        let mileage = self.mileage.map_or(0, |mileage| mileage.resolve("mileage"));
        errors.check(validators::validate_range(
            "mileage",
            mileage,
            Some(0),
            Some(i64::from(u32::MAX)),
        ));

        let (Some(date), Some(service_type), Some(category), Some(description)) =
            (self.date, self.service_type, self.category, self.description)
        else {
            return Err(errors);
        };
        errors.result()?;

        Ok(MaintenanceRecord {
            id,
            date,
            service_type,
            category,
            description,
            cost,
            mileage: u32::try_from(mileage).unwrap_or_default(),
            technician: self.technician.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            notes: self.notes,
            status: ServiceStatus::Completed,
            next_due: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> MaintenanceDraft {
        let mut draft = MaintenanceDraft::default();
        draft.set_field("description", "Oil Change".into()).unwrap();
        draft.set_field("date", "2024-02-01".into()).unwrap();
        draft.set_field("type", "routine".into()).unwrap();
        draft.set_field("category", "engine".into()).unwrap();
        draft
    }

    #[test]
    fn test_missing_fields_in_required_order() {
        let mut draft = MaintenanceDraft::default();
        assert_eq!(
            draft.missing_fields(),
            vec!["description", "date", "type", "category"]
        );
        draft.set_field("type", "repair".into()).unwrap();
        assert_eq!(draft.missing_fields(), vec!["description", "date", "category"]);
    }

    #[test]
    fn test_blank_value_clears_field() {
        let mut draft = filled_draft();
        draft.set_field("description", "".into()).unwrap();
        assert_eq!(draft.description, None);
        assert_eq!(draft.missing_fields(), vec!["description"]);
    }

    #[test]
    fn test_out_of_vocabulary_value_is_rejected() {
        let mut draft = filled_draft();
        let err = draft.set_field("type", "oil".into()).unwrap_err();
        assert_eq!(err.field, "type");
        assert_eq!(draft.service_type, Some(ServiceType::Routine));
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let mut draft = MaintenanceDraft::default();
        assert!(draft.set_field("date", "02/01/2024".into()).is_err());
        assert_eq!(draft.date, None);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut draft = MaintenanceDraft::default();
        assert!(draft.set_field("vin", "1HGCM82633A004352".into()).is_err());
    }

    #[test]
    fn test_build_applies_defaults() {
        let record = filled_draft().build(RecordId::new("new")).unwrap();
        assert_eq!(record.status, ServiceStatus::Completed);
        assert_eq!(record.cost, Decimal::ZERO);
        assert_eq!(record.mileage, 0);
        assert_eq!(record.technician, "");
        assert_eq!(record.location, "");
        assert_eq!(record.notes, None);
        assert_eq!(record.next_due, None);
    }

    #[test]
    fn test_build_coerces_unparseable_numbers_to_zero() {
        let mut draft = filled_draft();
        draft.set_field("cost", "twelve".into()).unwrap();
        draft.set_field("mileage", "lots".into()).unwrap();
        assert_eq!(draft.field_text("cost").as_deref(), Some("twelve"));

        let record = draft.build(RecordId::new("new")).unwrap();
        assert_eq!(record.cost, Decimal::ZERO);
        assert_eq!(record.mileage, 0);
    }

    #[test]
    fn test_build_rejects_negative_values() {
        let mut draft = filled_draft();
        draft.set_field("cost", "-5".into()).unwrap();
        draft.set_field("mileage", (-10_i64).into()).unwrap();

        let errors = draft.build(RecordId::new("new")).unwrap_err();
        assert!(errors.has_field("cost"));
        assert!(errors.has_field("mileage"));
    }

    #[test]
    fn test_deserialize_treats_empty_strings_as_absent() {
        let json = r#"{
            "id": "9", "date": "2024-03-01", "type": "repair", "category": "tires",
            "description": "Rotate tires", "cost": "40", "mileage": 46000,
            "notes": "", "status": "scheduled", "nextDue": ""
        }"#;
        let record: MaintenanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.notes, None);
        assert_eq!(record.next_due, None);
        assert_eq!(record.technician, "");
        assert_eq!(record.status, ServiceStatus::Scheduled);
    }

    #[test]
    fn test_overdue_uses_next_due() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut record = filled_draft().build(RecordId::new("1")).unwrap();
        assert!(!record.is_overdue(today));
        record.next_due = NaiveDate::from_ymd_opt(2024, 4, 15);
        assert!(record.is_overdue(today));
        record.next_due = Some(today);
        assert!(!record.is_overdue(today));
    }
}
