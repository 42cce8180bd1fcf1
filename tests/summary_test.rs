mod common;

use common::{date, maintenance_fixture, money, part, parts_fixture, service};
use garagecrate::{MaintenanceRecord, PartStatus, Summary};
use rust_decimal::Decimal;
use std::str::FromStr;

#[test]
fn test_fixture_maintenance_totals() {
    let store = maintenance_fixture();
    let summary = Summary::of(store.all());
    assert_eq!(summary.count(), 3);
    assert_eq!(summary.total_cost(), money(36649));
    assert_eq!(summary.most_recent_date(), Some(date(2024, 1, 15)));
}

#[test]
fn test_empty_sequence_is_total() {
    let records: Vec<MaintenanceRecord> = Vec::new();
    let summary = Summary::of(&records);
    assert_eq!(summary.count(), 0);
    assert_eq!(summary.total_cost(), Decimal::ZERO);
    assert_eq!(summary.most_recent_date(), None);
    assert_eq!(summary.count_where(|_| true), 0);
    assert!(summary.recent(3).is_empty());
    assert_eq!(summary.overdue_count(date(2030, 1, 1)), 0);
}

#[test]
fn test_total_cost_is_additive() {
    let first = vec![
        service("a", date(2024, 1, 3), 8599),
        service("b", date(2024, 1, 2), 24550),
    ];
    let second = vec![service("c", date(2024, 1, 1), 3500)];
    let none: &[MaintenanceRecord] = &[];
    let splits = [
        (first.as_slice(), second.as_slice()),
        (first.as_slice(), none),
        (none, second.as_slice()),
        (none, none),
    ];

    for (left, right) in splits {
        let joined: Vec<MaintenanceRecord> = left.iter().chain(right).cloned().collect();
        assert_eq!(
            Summary::of(&joined).total_cost(),
            Summary::of(left).total_cost() + Summary::of(right).total_cost()
        );
    }
}

#[test]
fn test_most_recent_date_is_first_element_not_max() {
    let records = vec![
        service("old", date(2023, 6, 1), 1),
        service("new", date(2024, 6, 1), 1),
    ];
    assert_eq!(Summary::of(&records).most_recent_date(), Some(date(2023, 6, 1)));
}

#[test]
fn test_recent_window() {
    let store = maintenance_fixture();
    let summary = Summary::of(store.all());
    assert_eq!(summary.recent(2).len(), 2);
    assert_eq!(summary.recent(10).len(), 3);
    assert_eq!(summary.recent(1)[0].id.as_str(), "1");
}

#[test]
fn test_overdue_count_on_fixtures() {
    let store = maintenance_fixture();
    let summary = Summary::of(store.all());
    // next due dates are 2024-04-15 and 2025-01-05
    assert_eq!(summary.overdue_count(date(2024, 2, 1)), 0);
    assert_eq!(summary.overdue_count(date(2024, 5, 1)), 1);
    assert_eq!(summary.overdue_count(date(2025, 6, 1)), 2);
}

#[test]
fn test_total_cost_saturates_instead_of_overflowing() {
    let huge = Decimal::from_str("50000000000000000000000000000").unwrap();
    let parts = vec![
        part("a", "Crate Engine", "CE-1", "Edelbrock").with_unit_price(huge).unwrap(),
        part("b", "Crate Engine", "CE-2", "Edelbrock").with_unit_price(huge).unwrap(),
    ];

    assert_eq!(Summary::of(&parts[..1]).total_cost(), huge);
    assert_eq!(Summary::of(&parts).total_cost(), Decimal::MAX);
}

#[test]
fn test_part_status_counts() {
    let store = parts_fixture();
    let summary = Summary::of(store.all());
    assert_eq!(summary.total_cost(), Decimal::from(4200));
    assert_eq!(summary.installed_count(), 1);
    assert_eq!(summary.outstanding_count(), 1);
    assert_eq!(
        summary.count_where(|part| part.status == PartStatus::Delivered),
        1
    );
    assert_eq!(summary.most_recent_date(), Some(date(2024, 1, 5)));
}
