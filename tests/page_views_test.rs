mod common;

use common::{date, ids, init_tracing, parts_fixture};
use garagecrate::{
    BuildId, CollectionError, MaintenanceLog, PartsCatalog, RecordId, RecordStore, ServiceStatus,
    SortConfig, SortDirection, VehicleId, ViewConfig,
};
use rust_decimal::Decimal;

fn maintenance_page() -> MaintenanceLog {
    MaintenanceLog::from_fixtures(VehicleId::new("1")).unwrap()
}

fn parts_page() -> PartsCatalog {
    PartsCatalog::from_fixtures(BuildId::new("1")).unwrap()
}

#[test]
fn test_maintenance_summary_labels() {
    let page = maintenance_page();
    let summary = page.summary(date(2024, 6, 1));

    assert_eq!(summary.total_records, 3);
    assert_eq!(summary.total_cost_label(), "$366.49");
    assert_eq!(summary.last_service_label(page.config()), "2024-01-15");
    assert_eq!(summary.overdue_items, 1);
}

#[test]
fn test_empty_maintenance_page_uses_placeholders() {
    let config = ViewConfig {
        missing_date_label: "Never".to_string(),
        ..ViewConfig::default()
    };
    let page = MaintenanceLog::new(VehicleId::new("2"), RecordStore::default(), config);
    let summary = page.summary(date(2024, 6, 1));

    assert_eq!(summary.total_cost_label(), "$0.00");
    assert_eq!(summary.last_service_label(page.config()), "Never");
    assert_eq!(summary.overdue_items, 0);
    assert!(page.recent_records().is_empty());
    assert!(page.cards().is_empty());
}

#[test]
fn test_maintenance_cards() {
    let page = maintenance_page();
    let cards = page.cards();
    assert_eq!(cards.len(), 3);

    let oil = &cards[0];
    assert_eq!(oil.icon, "🔧");
    assert_eq!(oil.badge_label, "routine");
    assert_eq!(oil.badge_class, "bg-warehouse-success");
    assert_eq!(oil.date, "2024-01-15");
    assert_eq!(oil.cost, "$85.99");
    assert_eq!(oil.mileage, "45,230");
    assert_eq!(oil.location.as_deref(), Some("AutoCare Plus"));
    assert_eq!(oil.next_due.as_deref(), Some("2024-04-15"));

    let brakes = &cards[1];
    assert_eq!(brakes.icon, "🛑");
    assert_eq!(brakes.badge_class, "bg-warehouse-warning");
    assert_eq!(brakes.cost, "$245.50");
    assert_eq!(brakes.next_due, None);
    assert_eq!(brakes.notes, None);

    assert_eq!(cards[2].icon, "🔨");
    assert_eq!(cards[2].badge_class, "bg-primary");
}

#[test]
fn test_adding_a_record_updates_the_page() {
    init_tracing();
    let mut page = maintenance_page();
    page.open_form();
    page.set_field("description", "Transmission Flush").unwrap();
    page.set_field("date", "2024-02-20").unwrap();
    page.set_field("type", "repair").unwrap();
    page.set_field("category", "transmission").unwrap();
    page.set_field("cost", "150").unwrap();

    let id = page.submit_record().unwrap();

    assert!(!page.form().is_open());
    assert_eq!(page.records().len(), 4);
    assert_eq!(page.records()[0].id, id);
    assert_eq!(page.cards()[0].icon, "⚙️");

    let recent: Vec<&str> = page.recent_records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(recent, vec![id.as_str(), "1", "2"]);

    let summary = page.summary(date(2024, 6, 1));
    assert_eq!(summary.total_records, 4);
    assert_eq!(summary.total_cost, Decimal::new(51649, 2));
    assert_eq!(summary.last_service, Some(date(2024, 2, 20)));
}

#[test]
fn test_oil_change_on_empty_log() {
    let mut page =
        MaintenanceLog::new(VehicleId::new("1"), RecordStore::default(), ViewConfig::default());
    page.open_form();
    page.set_field("description", "Oil Change").unwrap();
    page.set_field("date", "2024-02-01").unwrap();
    page.set_field("type", "routine").unwrap();
    page.set_field("category", "engine").unwrap();

    page.submit_record().unwrap();

    assert_eq!(page.records().len(), 1);
    let record = &page.records()[0];
    assert_eq!(record.description, "Oil Change");
    assert_eq!(record.date, date(2024, 2, 1));
    assert_eq!(record.status, ServiceStatus::Completed);
    assert_eq!(record.cost, Decimal::ZERO);
    assert_eq!(record.mileage, 0);
    assert!(!page.form().is_open());
}

#[test]
fn test_incomplete_submission_leaves_page_alone() {
    let mut page = maintenance_page();
    page.open_form();
    page.set_field("description", "Tire Rotation").unwrap();

    let err = page.submit_record().unwrap_err();
    assert!(matches!(err, CollectionError::IncompleteDraft(_)));
    assert_eq!(page.records().len(), 3);
    assert!(page.form().is_open());

    page.cancel_form();
    assert!(!page.form().is_open());
    assert_eq!(page.form().value("description").as_deref(), Some("Tire Rotation"));
}

#[test]
fn test_draft_amount_previews_use_invalid_label() {
    let mut page = maintenance_page();
    assert_eq!(page.cost_preview(), "");
    page.set_field("cost", "89.5").unwrap();
    assert_eq!(page.cost_preview(), "$89.50");
    page.set_field("cost", "twelve").unwrap();
    assert_eq!(page.cost_preview(), "—");

    let config = ViewConfig {
        invalid_number_label: "0".to_string(),
        ..ViewConfig::default()
    };
    let mut catalog = PartsCatalog::new(BuildId::new("1"), parts_fixture(), config);
    catalog.set_field("unitPrice", "lots").unwrap();
    assert_eq!(catalog.unit_price_preview(), "0");
    catalog.set_field("unitPrice", "1200").unwrap();
    assert_eq!(catalog.unit_price_preview(), "$1200.00");
}

#[test]
fn test_maintenance_search_and_sort() {
    let mut page = maintenance_page();
    page.set_search("inspection");
    assert_eq!(ids(&page.visible_records()), vec!["3"]);
    assert_eq!(page.search(), "inspection");

    page.set_search("");
    page.set_sort(Some(SortConfig::new("mileage", SortDirection::Asc)));
    assert_eq!(ids(&page.visible_records()), vec!["3", "2", "1"]);
}

#[test]
fn test_parts_summary_ignores_search() {
    let mut page = parts_page();
    page.set_search("perf");

    assert_eq!(ids(&page.visible_parts()), vec!["1", "3"]);
    let summary = page.summary();
    assert_eq!(summary.total_parts, 3);
    assert_eq!(summary.total_cost_label(), "$4,200");
    assert_eq!(summary.installed, 1);
    assert_eq!(summary.pending, 1);
}

#[test]
fn test_summary_of_oversized_parts_does_not_panic() {
    let mut page = parts_page();
    for number in ["CE-1", "CE-2"] {
        page.set_field("name", "Crate Engine").unwrap();
        page.set_field("partNumber", number).unwrap();
        page.set_field("brand", "Edelbrock").unwrap();
        page.set_field("unitPrice", "50000000000000000000000000000").unwrap();
        page.submit_part().unwrap();
    }

    let summary = page.summary();
    assert_eq!(summary.total_parts, 5);
    assert_eq!(summary.total_cost, Decimal::MAX);
}

#[test]
fn test_part_cards() {
    let page = parts_page();
    let cards = page.cards();

    let cam = &cards[0];
    assert_eq!(cam.badge_label, "delivered");
    assert_eq!(cam.badge_class, "bg-warehouse-accent");
    assert_eq!(cam.unit_price, "$1,200");
    assert_eq!(cam.total_price, "$1,200");
    assert_eq!(cam.delivery_date.as_deref(), Some("2024-01-12"));
    assert_eq!(cam.notes, "High-lift performance cam for increased power");

    let gaskets = &cards[2];
    assert_eq!(gaskets.badge_class, "bg-warehouse-warning");
    assert_eq!(gaskets.delivery_date, None);
    assert_eq!(gaskets.order_date.as_deref(), Some("2024-01-15"));
}

#[test]
fn test_part_without_notes_shows_placeholder() {
    let mut page = parts_page();
    page.set_field("name", "Oil Filter").unwrap();
    page.set_field("partNumber", "OF-1").unwrap();
    page.set_field("brand", "Wix").unwrap();
    page.submit_part().unwrap();

    let card = &page.cards()[0];
    assert_eq!(card.notes, "No notes available");
    assert_eq!(card.badge_label, "pending");
    assert_eq!(card.badge_class, "bg-muted");
    assert_eq!(page.summary().pending, 2);
}

#[test]
fn test_update_and_remove_parts() {
    let mut page = parts_page();
    let cam = RecordId::new("1");

    let updated = page
        .update_part(&cam, |part| *part = part.clone().with_quantity(2).unwrap())
        .unwrap();
    assert_eq!(updated.total_price, Decimal::from(2400));
    assert_eq!(page.summary().total_cost_label(), "$5,400");

    let removed = page.remove_part(&RecordId::new("2")).unwrap();
    assert_eq!(removed.name, "Cylinder Bore Kit");
    assert_eq!(page.summary().installed, 0);
    assert_eq!(page.summary().total_parts, 2);

    let err = page.remove_part(&RecordId::new("2")).unwrap_err();
    assert!(matches!(err, CollectionError::NotFound { .. }));
}

#[test]
fn test_search_cap_from_config() {
    let config = ViewConfig {
        max_search_length: 4,
        default_sort: Some(SortConfig::new("total_price", SortDirection::Asc)),
        ..ViewConfig::default()
    };
    let mut page = PartsCatalog::new(BuildId::new("1"), parts_fixture(), config);
    page.set_search("perfume");

    assert_eq!(ids(&page.visible_parts()), vec!["3", "1"]);
}

#[test]
fn test_default_sort_from_config() {
    let config = ViewConfig::from_json_str(
        r#"{"default_sort": {"column": "name", "direction": "ASC"}}"#,
    )
    .unwrap();
    let page = PartsCatalog::new(BuildId::new("engine"), parts_fixture(), config);

    assert_eq!(page.build_id().as_str(), "engine");
    assert_eq!(ids(&page.visible_parts()), vec!["2", "1", "3"]);
}
