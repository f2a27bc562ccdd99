use rust_decimal::Decimal;
use serde::Serialize;

use seafreight_parser::{Invoice, InvoiceStatus};

use crate::export::{fmt_date, fmt_decimal, fmt_opt_date, ExportTable};

/// Counts per payment status; all three variants are present even at zero.
pub fn status_breakdown(records: &[Invoice]) -> Vec<(InvoiceStatus, usize)> {
    InvoiceStatus::ALL
        .iter()
        .map(|status| {
            let count = records
                .iter()
                .filter(|record| record.status == *status)
                .count();
            (*status, count)
        })
        .collect()
}

/// Invoices with an open balance (Outstanding or Overdue), soonest due first.
pub fn outstanding(records: &[Invoice]) -> Vec<Invoice> {
    let mut open: Vec<Invoice> = records
        .iter()
        .filter(|record| record.status.is_open())
        .cloned()
        .collect();
    open.sort_by_key(|record| record.due_date);
    open
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceKpis {
    pub paid_percent: f64,
    pub outstanding_value: Decimal,
    pub overdue_value: Decimal,
}

/// Payment KPIs. `paid_percent` is 0 on an empty record set rather than a
/// division-by-zero failure; the value KPIs sum open balances, not face
/// amounts.
pub fn kpis(records: &[Invoice]) -> InvoiceKpis {
    let paid_percent = if records.is_empty() {
        0.0
    } else {
        let paid = records
            .iter()
            .filter(|record| record.status == InvoiceStatus::Paid)
            .count();
        paid as f64 / records.len() as f64 * 100.0
    };

    let mut outstanding_value = Decimal::ZERO;
    let mut overdue_value = Decimal::ZERO;
    for record in records {
        if record.status.is_open() {
            outstanding_value += record.balance();
        }
        if record.status == InvoiceStatus::Overdue {
            overdue_value += record.balance();
        }
    }

    InvoiceKpis {
        paid_percent,
        outstanding_value,
        overdue_value,
    }
}

pub fn export_rows(records: &[Invoice]) -> ExportTable {
    ExportTable {
        headers: vec![
            "Invoice_ID",
            "Container_ID",
            "Amount",
            "Due_Date",
            "Paid_Status",
            "Paid_Amount",
            "Payment_Date",
        ],
        rows: records
            .iter()
            .map(|record| {
                vec![
                    record.invoice_id.clone(),
                    record.shipment_id.clone(),
                    fmt_decimal(record.amount),
                    fmt_date(record.due_date),
                    record.status.as_str().to_string(),
                    fmt_decimal(record.paid_amount),
                    fmt_opt_date(record.payment_date),
                ]
            })
            .collect(),
    }
}
