#![allow(dead_code)]

use chrono::NaiveDate;
use garagecrate::{
    MaintenanceRecord, Part, PartStatus, RecordId, RecordStore, ServiceCategory, ServiceStatus,
    ServiceType,
};
use rust_decimal::Decimal;

/// Install a test subscriber once so `tracing` output shows up with `--nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Cents to a two decimal amount: `money(8599)` is 85.99.
pub fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

pub fn service(id: &str, on: NaiveDate, cost_cents: i64) -> MaintenanceRecord {
    MaintenanceRecord {
        id: RecordId::new(id),
        date: on,
        service_type: ServiceType::Routine,
        category: ServiceCategory::Engine,
        description: format!("Service {id}"),
        cost: money(cost_cents),
        mileage: 40_000,
        technician: "Mike Johnson".to_string(),
        location: "AutoCare Plus".to_string(),
        notes: None,
        status: ServiceStatus::Completed,
        next_due: None,
    }
}

pub fn part(id: &str, name: &str, part_number: &str, brand: &str) -> Part {
    Part {
        id: RecordId::new(id),
        name: name.to_string(),
        part_number: part_number.to_string(),
        brand: brand.to_string(),
        quantity: 1,
        unit_price: Decimal::from(100),
        total_price: Decimal::from(100),
        status: PartStatus::Pending,
        order_date: None,
        delivery_date: None,
        supplier: "AutoZone".to_string(),
        notes: None,
        warranty: "1 year".to_string(),
        category: "Engine".to_string(),
    }
}

pub fn maintenance_fixture() -> RecordStore<MaintenanceRecord> {
    garagecrate::fixtures::maintenance_records().expect("maintenance fixtures load")
}

pub fn parts_fixture() -> RecordStore<Part> {
    garagecrate::fixtures::parts().expect("parts fixtures load")
}

pub fn ids<R: garagecrate::Record>(records: &[&R]) -> Vec<String> {
    records.iter().map(|record| record.id().to_string()).collect()
}
