use chrono::NaiveDate;
use rust_decimal_macros::dec;

use seafreight_core::{clients, invoices, shipments};
use seafreight_parser::{
    load_clients, load_invoices, load_shipments, read_rows, Client, DeliveryStatus, Invoice,
    InvoiceStatus, LoaderConfig, Shipment, ShipmentStatus,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[test]
fn shipment_export_round_trips_through_the_loader() {
    let records = vec![
        Shipment {
            shipment_id: "CNT-001".to_string(),
            origin: "Shanghai".to_string(),
            destination: "Rotterdam".to_string(),
            status: ShipmentStatus::Delivered,
            eta: date(2024, 1, 10),
            delivered_date: Some(date(2024, 1, 12)),
            planned_cost: dec!(1000.00),
            actual_cost: Some(dec!(1300.50)),
        },
        Shipment {
            shipment_id: "CNT-002".to_string(),
            origin: "Singapore".to_string(),
            destination: "Hamburg".to_string(),
            status: ShipmentStatus::PendingCustoms,
            eta: date(2024, 2, 1),
            delivered_date: None,
            planned_cost: dec!(2500.00),
            actual_cost: None,
        },
    ];

    let table = shipments::export_rows(&records);
    let bytes = table.to_csv_bytes().expect("csv bytes");

    let rows = read_rows(bytes.as_slice()).expect("reparse csv");
    let outcome = load_shipments(&rows, &LoaderConfig::default());

    assert!(outcome.rejects.is_empty(), "rejects: {:?}", outcome.rejects);
    assert_eq!(outcome.records, records);
}

#[test]
fn invoice_export_round_trips_through_the_loader() {
    let records = vec![
        Invoice {
            invoice_id: "INV-1".to_string(),
            shipment_id: "CNT-001".to_string(),
            amount: dec!(100.00),
            due_date: date(2024, 1, 15),
            status: InvoiceStatus::Paid,
            paid_amount: dec!(100.00),
            payment_date: Some(date(2024, 1, 14)),
        },
        Invoice {
            invoice_id: "INV-2".to_string(),
            shipment_id: "CNT-002".to_string(),
            amount: dec!(50.25),
            due_date: date(2024, 2, 15),
            status: InvoiceStatus::Overdue,
            paid_amount: dec!(0.00),
            payment_date: None,
        },
    ];

    let table = invoices::export_rows(&records);
    let bytes = table.to_csv_bytes().expect("csv bytes");

    let rows = read_rows(bytes.as_slice()).expect("reparse csv");
    let outcome = load_invoices(&rows, &LoaderConfig::default());

    assert!(outcome.rejects.is_empty(), "rejects: {:?}", outcome.rejects);
    assert_eq!(outcome.records, records);
}

#[test]
fn client_export_round_trips_through_the_loader() {
    let records = vec![
        Client {
            client_id: "CL-1".to_string(),
            name: "Acme Imports".to_string(),
            delivery_status: DeliveryStatus::OutForDelivery,
            pickup_date: Some(date(2024, 3, 1)),
            delivery_address: Some("12 Harbour Way".to_string()),
        },
        Client {
            client_id: "CL-2".to_string(),
            name: "Blue Anchor".to_string(),
            delivery_status: DeliveryStatus::Failed,
            pickup_date: None,
            delivery_address: None,
        },
    ];

    let table = clients::export_rows(&records);
    let bytes = table.to_csv_bytes().expect("csv bytes");

    let rows = read_rows(bytes.as_slice()).expect("reparse csv");
    let outcome = load_clients(&rows, &LoaderConfig::default());

    assert!(outcome.rejects.is_empty(), "rejects: {:?}", outcome.rejects);
    assert_eq!(outcome.records, records);
}

#[test]
fn export_fixes_decimals_at_two_places_and_iso_dates() {
    let records = vec![Shipment {
        shipment_id: "CNT-001".to_string(),
        origin: "Shanghai".to_string(),
        destination: "Rotterdam".to_string(),
        status: ShipmentStatus::Delivered,
        eta: date(2024, 1, 10),
        delivered_date: Some(date(2024, 1, 12)),
        planned_cost: dec!(1000),
        actual_cost: Some(dec!(1300.5)),
    }];

    let table = shipments::export_rows(&records);
    assert_eq!(table.rows[0][4], "2024-01-10");
    assert_eq!(table.rows[0][6], "1000.00");
    assert_eq!(table.rows[0][7], "1300.50");
}
