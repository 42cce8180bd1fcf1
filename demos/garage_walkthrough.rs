//! Walk through both pages with the built-in fixtures.
//!
//! ```bash
//! RUST_LOG=garagecrate=debug cargo run --example garage_walkthrough
//! ```

use chrono::NaiveDate;
use garagecrate::presentation::option_label;
use garagecrate::{BuildId, MaintenanceLog, PartsCatalog, RecordId, ServiceType, VehicleId};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let today = NaiveDate::from_ymd_opt(2024, 6, 1).ok_or("invalid date")?;

    let mut log = MaintenanceLog::from_fixtures(VehicleId::new("1"))?;
    log.open_form();
    log.set_field("description", "Oil Change")?;
    log.set_field("date", "2024-05-20")?;
    log.set_field("type", "routine")?;
    log.set_field("category", "engine")?;
    log.set_field("mileage", "48100")?;
    let added = log.submit_record()?;
    tracing::info!(id = %added, "Added maintenance record");

    let summary = log.summary(today);
    println!("Maintenance for vehicle {}", log.vehicle_id());
    println!(
        "  {} records, {} total, last service {}, {} overdue",
        summary.total_records,
        summary.total_cost_label(),
        summary.last_service_label(log.config()),
        summary.overdue_items
    );
    for card in log.cards() {
        println!(
            "  {} {} [{}] {} at {} mi",
            card.icon, card.description, card.badge_label, card.cost, card.mileage
        );
    }

    let types: Vec<String> = ServiceType::VOCABULARY.iter().map(|t| option_label(t)).collect();
    println!("  Service types: {}", types.join(", "));

    let mut catalog = PartsCatalog::from_fixtures(BuildId::new("1"))?;
    catalog.update_part(&RecordId::new("3"), |part| {
        part.status = garagecrate::PartStatus::Delivered;
    })?;
    catalog.set_search("perf");

    let summary = catalog.summary();
    println!("Parts for build {}", catalog.build_id());
    println!(
        "  {} parts, {} total, {} installed, {} pending",
        summary.total_parts,
        summary.total_cost_label(),
        summary.installed,
        summary.pending
    );
    println!("  Matching '{}':", catalog.search());
    for card in catalog.cards() {
        println!(
            "    {} ({}) x{} {} [{}]",
            card.name, card.part_number, card.quantity, card.total_price, card.badge_label
        );
    }

    Ok(())
}
