use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use seafreight_core::kpis::dashboard_kpis;
use seafreight_parser::{Invoice, InvoiceStatus, Shipment, ShipmentStatus, WarehouseRecord};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn fixture() -> (Vec<Shipment>, Vec<Invoice>, Vec<WarehouseRecord>) {
    let shipments = vec![
        Shipment {
            shipment_id: "CNT-001".to_string(),
            origin: "Shanghai".to_string(),
            destination: "Rotterdam".to_string(),
            status: ShipmentStatus::Delivered,
            eta: date(2024, 1, 10),
            delivered_date: Some(date(2024, 1, 12)),
            planned_cost: dec!(1000),
            actual_cost: Some(dec!(1300)),
        },
        Shipment {
            shipment_id: "CNT-002".to_string(),
            origin: "Singapore".to_string(),
            destination: "Hamburg".to_string(),
            status: ShipmentStatus::Delayed,
            eta: date(2024, 1, 20),
            delivered_date: None,
            planned_cost: dec!(2000),
            actual_cost: None,
        },
        Shipment {
            shipment_id: "CNT-003".to_string(),
            origin: "Busan".to_string(),
            destination: "Antwerp".to_string(),
            status: ShipmentStatus::Delivered,
            eta: date(2024, 1, 15),
            delivered_date: Some(date(2024, 1, 14)),
            planned_cost: dec!(1000),
            actual_cost: Some(dec!(900)),
        },
    ];

    let invoices = vec![
        Invoice {
            invoice_id: "INV-1".to_string(),
            shipment_id: "CNT-001".to_string(),
            amount: dec!(100),
            due_date: date(2024, 1, 15),
            status: InvoiceStatus::Paid,
            paid_amount: dec!(100),
            payment_date: Some(date(2024, 1, 14)),
        },
        Invoice {
            invoice_id: "INV-2".to_string(),
            shipment_id: "CNT-002".to_string(),
            amount: dec!(50),
            due_date: date(2024, 2, 15),
            status: InvoiceStatus::Outstanding,
            paid_amount: dec!(0),
            payment_date: None,
        },
    ];

    let warehouse = vec![
        WarehouseRecord {
            location: "Dock A".to_string(),
            sku: "SKU-1".to_string(),
            on_hand: 10,
            inbound_date: date(2024, 1, 1),
            inbound_qty: 5,
        },
        WarehouseRecord {
            location: "Dock A".to_string(),
            sku: "SKU-1".to_string(),
            on_hand: 25,
            inbound_date: date(2024, 1, 8),
            inbound_qty: 15,
        },
    ];

    (shipments, invoices, warehouse)
}

#[test]
fn kpi_strip_scenario() {
    let (shipments, invoices, warehouse) = fixture();
    let kpis = dashboard_kpis(&shipments, &invoices, &warehouse);

    assert_eq!(kpis.total_shipments, 3);
    assert!((kpis.delayed_percent - 100.0 / 3.0).abs() < 1e-9);
    assert_eq!(kpis.planned_cost_total, dec!(4000));
    assert_eq!(kpis.actual_cost_total, dec!(2200));
    assert_eq!(kpis.cost_variance_total, dec!(200));
    assert!((kpis.cost_variance_percent - 5.0).abs() < 1e-9);
    assert!((kpis.invoices_paid_percent - 50.0).abs() < 1e-9);
    assert_eq!(kpis.outstanding_value, dec!(50));
    // one of the two delivered shipments met its ETA
    assert!((kpis.on_time_sla_percent - 50.0).abs() < 1e-9);
    assert_eq!(kpis.on_hand_total, 25);
}

#[test]
fn kpi_strip_is_all_zero_on_empty_inputs() {
    let kpis = dashboard_kpis(&[], &[], &[]);

    assert_eq!(kpis.total_shipments, 0);
    assert_eq!(kpis.delayed_percent, 0.0);
    assert_eq!(kpis.planned_cost_total, Decimal::ZERO);
    assert_eq!(kpis.actual_cost_total, Decimal::ZERO);
    assert_eq!(kpis.cost_variance_total, Decimal::ZERO);
    assert_eq!(kpis.cost_variance_percent, 0.0);
    assert_eq!(kpis.invoices_paid_percent, 0.0);
    assert_eq!(kpis.outstanding_value, Decimal::ZERO);
    assert_eq!(kpis.on_time_sla_percent, 0.0);
    assert_eq!(kpis.on_hand_total, 0);
}
