use crate::core::ids::RecordId;
use crate::core::traits::{Draft, FieldValue, Record, SortKey};
use crate::draft::{NumericInput, parse_integer, parse_money};
use crate::models::maintenance::{DATE_FORMAT, parse_date};
use crate::models::vocabulary;
use crate::summary::Summary;
use crate::validation::{Validatable, ValidationError, ValidationErrors, validators};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{NoneAsEmptyString, serde_as};

vocabulary! {
    /// Where a part is in its order-to-install lifecycle.
    pub enum PartStatus {
        Ordered => "ordered",
        Delivered => "delivered",
        Installed => "installed",
        Pending => "pending",
    }
}

impl PartStatus {
    /// Not yet in hand: either still to be ordered or on its way.
    #[must_use]
    pub fn is_outstanding(self) -> bool {
        matches!(self, Self::Pending | Self::Ordered)
    }
}

/// A part ordered for a build plan.
///
/// `total_price` is stored alongside `quantity` and `unit_price` and must
/// always equal their product.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: RecordId,
    pub name: String,
    pub part_number: String,
    pub brand: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub status: PartStatus,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub order_date: Option<NaiveDate>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    #[serde(default)]
    pub supplier: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub warranty: String,
    #[serde(default)]
    pub category: String,
}

fn total_overflow() -> ValidationError {
    ValidationError::new("totalPrice", "Quantity x unit price is too large")
}

fn checked_total(quantity: i64, unit_price: Decimal) -> Option<Decimal> {
    unit_price.checked_mul(Decimal::from(quantity))
}

impl Part {
    /// `quantity × unit_price`, or `None` when the product does not fit a `Decimal`.
    #[must_use]
    pub fn expected_total(&self) -> Option<Decimal> {
        checked_total(i64::from(self.quantity), self.unit_price)
    }

    /// Change the quantity and recompute the total.
    ///
    /// # Errors
    ///
    /// Fails on `totalPrice` when the new total is out of range.
    pub fn with_quantity(mut self, quantity: u32) -> Result<Self, ValidationError> {
        self.quantity = quantity;
        self.total_price = self.expected_total().ok_or_else(total_overflow)?;
        Ok(self)
    }

    /// Change the unit price and recompute the total.
    ///
    /// # Errors
    ///
    /// Fails on `totalPrice` when the new total is out of range.
    pub fn with_unit_price(mut self, unit_price: Decimal) -> Result<Self, ValidationError> {
        self.unit_price = unit_price;
        self.total_price = self.expected_total().ok_or_else(total_overflow)?;
        Ok(self)
    }
}

impl Validatable for Part {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(validators::validate_required("id", self.id.as_str()));
        errors.check(validators::validate_required("name", &self.name));
        errors.check(validators::validate_range("quantity", self.quantity, Some(1), None));
        errors.check(validators::validate_non_negative("unitPrice", self.unit_price));
        errors.check(validators::validate_non_negative("totalPrice", self.total_price));
        match self.expected_total() {
            None => errors.add(total_overflow()),
            Some(expected) if expected != self.total_price => {
                errors.add(ValidationError::new(
                    "totalPrice",
                    format!("Must equal quantity x unit price ({expected})"),
                ));
            }
            Some(_) => {}
        }
        errors.result()
    }
}

impl Record for Part {
    const RESOURCE_NAME_SINGULAR: &'static str = "Part";
    const RESOURCE_NAME_PLURAL: &'static str = "Parts";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn cost(&self) -> Decimal {
        self.total_price
    }

    fn primary_date(&self) -> Option<NaiveDate> {
        self.order_date
    }

    fn searchable_columns() -> Vec<&'static str> {
        vec!["name", "part_number", "brand"]
    }

    fn text_value(&self, column: &str) -> Option<&str> {
        match column {
            "name" => Some(&self.name),
            "part_number" => Some(&self.part_number),
            "brand" => Some(&self.brand),
            "supplier" => Some(&self.supplier),
            "category" => Some(&self.category),
            _ => None,
        }
    }

    fn sortable_columns() -> Vec<&'static str> {
        vec![
            "id",
            "name",
            "part_number",
            "brand",
            "status",
            "quantity",
            "unit_price",
            "total_price",
            "order_date",
        ]
    }

    fn sort_key(&self, column: &str) -> Option<SortKey<'_>> {
        match column {
            "id" => Some(SortKey::Text(self.id.as_str())),
            "name" => Some(SortKey::Text(&self.name)),
            "part_number" => Some(SortKey::Text(&self.part_number)),
            "brand" => Some(SortKey::Text(&self.brand)),
            "status" => Some(SortKey::Text(self.status.as_str())),
            "quantity" => Some(SortKey::Integer(i64::from(self.quantity))),
            "unit_price" => Some(SortKey::Money(self.unit_price)),
            "total_price" => Some(SortKey::Money(self.total_price)),
            "order_date" => Some(SortKey::Date(self.order_date)),
            _ => None,
        }
    }
}

impl Summary<'_, Part> {
    #[must_use]
    pub fn installed_count(&self) -> usize {
        self.count_where(|part| part.status == PartStatus::Installed)
    }

    /// Parts that are pending or ordered.
    #[must_use]
    pub fn outstanding_count(&self) -> usize {
        self.count_where(|part| part.status.is_outstanding())
    }
}

/// The "Add Part" form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartDraft {
    pub name: Option<String>,
    pub part_number: Option<String>,
    pub brand: Option<String>,
    pub quantity: Option<NumericInput<i64>>,
    pub unit_price: Option<NumericInput<Decimal>>,
    pub status: Option<PartStatus>,
    pub order_date: Option<NaiveDate>,
    pub delivery_date: Option<NaiveDate>,
    pub supplier: Option<String>,
    pub notes: Option<String>,
    pub warranty: Option<String>,
    pub category: Option<String>,
}

impl Draft for PartDraft {
    type Target = Part;

    const REQUIRED_FIELDS: &'static [&'static str] = &["name", "partNumber", "brand"];

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), ValidationError> {
        let blank = value.is_blank();
        match name {
            "quantity" => self.quantity = (!blank).then(|| parse_integer(value)),
            "unitPrice" => self.unit_price = (!blank).then(|| parse_money(value)),
            "status" => {
                self.status = if blank {
                    None
                } else {
                    let text = value.into_text();
                    Some(text.trim().parse().map_err(|error: super::UnknownVariant| {
                        ValidationError::new(name, error.to_string())
                    })?)
                };
            }
            "orderDate" => {
                self.order_date = if blank { None } else { Some(parse_date(name, value)?) };
            }
            "deliveryDate" => {
                self.delivery_date = if blank { None } else { Some(parse_date(name, value)?) };
            }
            "name" => self.name = (!blank).then(|| value.into_text()),
            "partNumber" => self.part_number = (!blank).then(|| value.into_text()),
            "brand" => self.brand = (!blank).then(|| value.into_text()),
            "supplier" => self.supplier = (!blank).then(|| value.into_text()),
            "notes" => self.notes = (!blank).then(|| value.into_text()),
            "warranty" => self.warranty = (!blank).then(|| value.into_text()),
            "category" => self.category = (!blank).then(|| value.into_text()),
            _ => return Err(ValidationError::new(name, "Unknown field")),
        }
        Ok(())
    }

    fn field_text(&self, name: &str) -> Option<String> {
        match name {
            "quantity" => self.quantity.as_ref().map(NumericInput::display),
            "unitPrice" => self.unit_price.as_ref().map(NumericInput::display),
            "status" => self.status.map(|status| status.as_str().to_string()),
            "orderDate" => self.order_date.map(|date| date.format(DATE_FORMAT).to_string()),
            "deliveryDate" => self
                .delivery_date
                .map(|date| date.format(DATE_FORMAT).to_string()),
            "name" => self.name.clone(),
            "partNumber" => self.part_number.clone(),
            "brand" => self.brand.clone(),
            "supplier" => self.supplier.clone(),
            "notes" => self.notes.clone(),
            "warranty" => self.warranty.clone(),
            "category" => self.category.clone(),
            _ => None,
        }
    }

    fn build(self, id: RecordId) -> Result<Part, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for field in self.missing_fields() {
            errors.add(ValidationError::new(field, "This field is required"));
        }

        // An untouched quantity means one of the part
        let quantity = self
            .quantity
            .map_or(1, |quantity| quantity.resolve("quantity"));
        errors.check(validators::validate_range(
            "quantity",
            quantity,
            Some(1),
            Some(i64::from(u32::MAX)),
        ));

        let unit_price = self
            .unit_price
            .map_or(Decimal::ZERO, |price| price.resolve("unitPrice"));
        errors.check(validators::validate_non_negative("unitPrice", unit_price));

        let total_price = checked_total(quantity, unit_price);
        if total_price.is_none() {
            errors.add(total_overflow());
        }

        let (Some(name), Some(part_number), Some(brand), Some(total_price)) =
            (self.name, self.part_number, self.brand, total_price)
        else {
            return Err(errors);
        };
        errors.result()?;

        Ok(Part {
            id,
            name,
            part_number,
            brand,
            quantity: u32::try_from(quantity).unwrap_or(1),
            unit_price,
            total_price,
            status: self.status.unwrap_or(PartStatus::Pending),
            order_date: self.order_date,
            delivery_date: self.delivery_date,
            supplier: self.supplier.unwrap_or_default(),
            notes: self.notes,
            warranty: self.warranty.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
        })
    }
}
