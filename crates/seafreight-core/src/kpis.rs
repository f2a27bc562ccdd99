use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use seafreight_parser::{Invoice, Shipment, WarehouseRecord};

use crate::invoices;
use crate::shipments::{compute_sla, cost_variance, SlaOutcome};
use crate::warehouse;

/// The dashboard's header strip, recomputed from scratch on every call.
/// Every percentage is 0 (never NaN, never an error) when its denominator
/// is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardKpis {
    pub total_shipments: usize,
    pub delayed_percent: f64,
    pub planned_cost_total: Decimal,
    pub actual_cost_total: Decimal,
    pub cost_variance_total: Decimal,
    pub cost_variance_percent: f64,
    pub invoices_paid_percent: f64,
    pub outstanding_value: Decimal,
    pub on_time_sla_percent: f64,
    pub on_hand_total: u64,
}

pub fn dashboard_kpis(
    shipments: &[Shipment],
    invoices: &[Invoice],
    warehouse: &[WarehouseRecord],
) -> DashboardKpis {
    let total_shipments = shipments.len();

    let delayed = shipments
        .iter()
        .filter(|record| record.status.is_delayed())
        .count();
    let delayed_percent = percent(delayed, total_shipments);

    let mut planned_cost_total = Decimal::ZERO;
    let mut actual_cost_total = Decimal::ZERO;
    let mut cost_variance_total = Decimal::ZERO;
    for record in shipments {
        planned_cost_total += record.planned_cost;
        if let Some(actual) = record.actual_cost {
            actual_cost_total += actual;
        }
        if let Some(variance) = cost_variance(record) {
            cost_variance_total += variance;
        }
    }
    let cost_variance_percent = if planned_cost_total.is_zero() {
        0.0
    } else {
        (cost_variance_total / planned_cost_total)
            .to_f64()
            .unwrap_or(0.0)
            * 100.0
    };

    let invoice_kpis = invoices::kpis(invoices);

    let mut delivered = 0usize;
    let mut on_time = 0usize;
    for record in shipments {
        match compute_sla(record) {
            SlaOutcome::Met { .. } => {
                delivered += 1;
                on_time += 1;
            }
            SlaOutcome::Missed { .. } => delivered += 1,
            SlaOutcome::Pending => {}
        }
    }
    let on_time_sla_percent = percent(on_time, delivered);

    DashboardKpis {
        total_shipments,
        delayed_percent,
        planned_cost_total,
        actual_cost_total,
        cost_variance_total,
        cost_variance_percent,
        invoices_paid_percent: invoice_kpis.paid_percent,
        outstanding_value: invoice_kpis.outstanding_value,
        on_time_sla_percent,
        on_hand_total: warehouse::total_on_hand(warehouse),
    }
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
