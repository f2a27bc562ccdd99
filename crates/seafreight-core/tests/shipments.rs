use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use seafreight_core::shipments::{
    aggregate_by_route, aggregate_by_route_sorted, compute_sla, cost_variance, filter, flag_alerts,
    status_breakdown, top_cost_overruns, variance_percent, AlertFlag, AlertThresholds,
    ShipmentFilter, SlaOutcome,
};
use seafreight_core::AnalyticsError;
use seafreight_parser::{Shipment, ShipmentStatus};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn shipment(
    id: &str,
    origin: &str,
    destination: &str,
    status: ShipmentStatus,
    eta: NaiveDate,
    delivered: Option<NaiveDate>,
    planned: Decimal,
    actual: Option<Decimal>,
) -> Shipment {
    Shipment {
        shipment_id: id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        status,
        eta,
        delivered_date: delivered,
        planned_cost: planned,
        actual_cost: actual,
    }
}

fn fixture() -> Vec<Shipment> {
    vec![
        shipment(
            "CNT-001",
            "Shanghai",
            "Rotterdam",
            ShipmentStatus::Delivered,
            date(2024, 1, 10),
            Some(date(2024, 1, 12)),
            dec!(1000),
            Some(dec!(1300)),
        ),
        shipment(
            "CNT-002",
            "Singapore",
            "Hamburg",
            ShipmentStatus::InTransit,
            date(2024, 1, 20),
            None,
            dec!(2500),
            None,
        ),
        shipment(
            "CNT-003",
            "Shanghai",
            "Rotterdam",
            ShipmentStatus::Delayed,
            date(2024, 1, 14),
            None,
            dec!(900),
            None,
        ),
    ]
}

#[test]
fn empty_filter_is_identity() {
    let records = fixture();
    let filtered = filter(&records, &ShipmentFilter::default()).expect("filter succeeded");
    assert_eq!(filtered, records);
}

#[test]
fn filter_is_conjunctive() {
    let records = fixture();
    let criteria = ShipmentFilter {
        origins: Some(vec!["Shanghai".to_string()]),
        statuses: Some(vec![ShipmentStatus::Delayed]),
        ..ShipmentFilter::default()
    };
    let filtered = filter(&records, &criteria).expect("filter succeeded");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].shipment_id, "CNT-003");
}

#[test]
fn eta_window_is_inclusive_on_both_ends() {
    let records = fixture();
    let criteria = ShipmentFilter {
        eta_from: Some(date(2024, 1, 10)),
        eta_to: Some(date(2024, 1, 14)),
        ..ShipmentFilter::default()
    };
    let filtered = filter(&records, &criteria).expect("filter succeeded");
    let ids: Vec<&str> = filtered
        .iter()
        .map(|record| record.shipment_id.as_str())
        .collect();
    assert_eq!(ids, vec!["CNT-001", "CNT-003"]);
}

#[test]
fn inverted_eta_window_is_rejected() {
    let records = fixture();
    let criteria = ShipmentFilter {
        eta_from: Some(date(2024, 2, 1)),
        eta_to: Some(date(2024, 1, 1)),
        ..ShipmentFilter::default()
    };
    let result = filter(&records, &criteria);
    assert!(matches!(
        result,
        Err(AnalyticsError::InvalidFilterRange { .. })
    ));
}

#[test]
fn late_delivery_scenario() {
    // planned ETA 2024-01-10, delivered 2024-01-12, planned 1000, actual 1300
    let records = fixture();
    let record = &records[0];

    assert_eq!(compute_sla(record), SlaOutcome::Missed { variance_days: 2 });
    assert_eq!(cost_variance(record), Some(dec!(300)));

    let thresholds = AlertThresholds {
        cost_overrun: dec!(200),
        eta_risk_days: 3,
    };
    let alerts = flag_alerts(&fixture(), &thresholds, date(2024, 1, 15));
    let alerted = alerts
        .iter()
        .find(|alert| alert.shipment.shipment_id == "CNT-001")
        .expect("CNT-001 flagged");
    assert_eq!(alerted.flags, vec![AlertFlag::CostOverrun]);
}

#[test]
fn on_time_delivery_meets_sla() {
    let record = shipment(
        "CNT-010",
        "Busan",
        "Antwerp",
        ShipmentStatus::Delivered,
        date(2024, 3, 10),
        Some(date(2024, 3, 9)),
        dec!(800),
        Some(dec!(790)),
    );
    assert_eq!(compute_sla(&record), SlaOutcome::Met { variance_days: -1 });
}

#[test]
fn undelivered_sla_is_pending_with_undefined_variance() {
    let records = fixture();
    let record = &records[1];
    let outcome = compute_sla(record);
    assert_eq!(outcome, SlaOutcome::Pending);
    assert_eq!(outcome.variance_days(), None);
    assert_eq!(cost_variance(record), None);
}

#[test]
fn eta_risk_includes_already_overdue_shipments() {
    let records = fixture();
    let thresholds = AlertThresholds::default();
    // CNT-003's ETA (Jan 14) is already behind now (Jan 20): negative
    // remaining days still count as at-risk.
    let alerts = flag_alerts(&records, &thresholds, date(2024, 1, 20));

    let ids: Vec<&str> = alerts
        .iter()
        .map(|alert| alert.shipment.shipment_id.as_str())
        .collect();
    assert!(ids.contains(&"CNT-002"));
    assert!(ids.contains(&"CNT-003"));

    // the delivered shipment never carries an ETA flag
    let delivered = alerts
        .iter()
        .find(|alert| alert.shipment.shipment_id == "CNT-001");
    if let Some(alert) = delivered {
        assert!(!alert.flags.contains(&AlertFlag::EtaRisk));
    }
}

#[test]
fn flags_are_additive() {
    // an accrued actual cost before delivery earns both flags at once
    let record = shipment(
        "CNT-020",
        "Ningbo",
        "Felixstowe",
        ShipmentStatus::Delayed,
        date(2024, 1, 18),
        None,
        dec!(1000),
        Some(dec!(1500)),
    );
    let alerts = flag_alerts(
        std::slice::from_ref(&record),
        &AlertThresholds::default(),
        date(2024, 1, 17),
    );
    assert_eq!(alerts.len(), 1);
    assert_eq!(
        alerts[0].flags,
        vec![AlertFlag::CostOverrun, AlertFlag::EtaRisk]
    );
}

#[test]
fn variance_at_threshold_is_not_an_overrun() {
    let record = shipment(
        "CNT-021",
        "Ningbo",
        "Felixstowe",
        ShipmentStatus::Delivered,
        date(2024, 1, 18),
        Some(date(2024, 1, 18)),
        dec!(1000),
        Some(dec!(1200)),
    );
    let alerts = flag_alerts(
        std::slice::from_ref(&record),
        &AlertThresholds::default(),
        date(2024, 1, 20),
    );
    assert!(alerts.is_empty());
}

#[test]
fn route_aggregation_groups_in_first_seen_order() {
    let records = fixture();
    let routes = aggregate_by_route(&records);

    assert_eq!(routes.len(), 2);
    let (first_route, first_summary) = &routes[0];
    assert_eq!(first_route.label(), "Shanghai → Rotterdam");
    assert_eq!(first_summary.count, 2);
    assert_eq!(first_summary.planned_total, dec!(1900));
    assert_eq!(first_summary.actual_total, dec!(1300));
    assert_eq!(first_summary.variance_total, dec!(300));

    let (second_route, second_summary) = &routes[1];
    assert_eq!(second_route.label(), "Singapore → Hamburg");
    assert_eq!(second_summary.count, 1);
    assert_eq!(second_summary.variance_total, Decimal::ZERO);
}

#[test]
fn sorted_route_aggregation_ranks_by_variance() {
    let mut records = fixture();
    records.push(shipment(
        "CNT-004",
        "Singapore",
        "Hamburg",
        ShipmentStatus::Delivered,
        date(2024, 1, 22),
        Some(date(2024, 1, 25)),
        dec!(1000),
        Some(dec!(1900)),
    ));

    let routes = aggregate_by_route_sorted(&records);
    assert_eq!(routes[0].0.label(), "Singapore → Hamburg");
    assert_eq!(routes[0].1.variance_total, dec!(900));
}

#[test]
fn status_breakdown_sums_to_input_length() {
    let records = fixture();
    let breakdown = status_breakdown(&records);

    assert_eq!(breakdown.len(), ShipmentStatus::ALL.len());
    let total: usize = breakdown.iter().map(|(_, count)| count).sum();
    assert_eq!(total, records.len());
    assert!(breakdown
        .iter()
        .any(|(status, count)| *status == ShipmentStatus::Cleared && *count == 0));
}

#[test]
fn top_overruns_are_ordered_and_bounded() {
    let mut records = fixture();
    records.push(shipment(
        "CNT-005",
        "Busan",
        "Antwerp",
        ShipmentStatus::Delivered,
        date(2024, 1, 5),
        Some(date(2024, 1, 6)),
        dec!(500),
        Some(dec!(1400)),
    ));

    let top = top_cost_overruns(&records, 1);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].shipment_id, "CNT-005");

    let all = top_cost_overruns(&records, 10);
    // undelivered shipments have no variance and never rank
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].shipment_id, "CNT-005");
    assert_eq!(all[1].shipment_id, "CNT-001");
}

#[test]
fn variance_percent_is_undefined_for_zero_planned_cost() {
    let record = shipment(
        "CNT-006",
        "Busan",
        "Antwerp",
        ShipmentStatus::Delivered,
        date(2024, 1, 5),
        Some(date(2024, 1, 6)),
        Decimal::ZERO,
        Some(dec!(100)),
    );
    assert_eq!(variance_percent(&record), None);

    let records = fixture();
    let pct = variance_percent(&records[0]).expect("defined variance percent");
    assert!((pct - 30.0).abs() < 1e-9);
}
