use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use seafreight_parser::{Shipment, ShipmentStatus};

use crate::error::{AnalyticsError, Result};
use crate::export::{fmt_date, fmt_decimal, fmt_opt_date, fmt_opt_decimal, ExportTable};

/// Conjunctive shipment filter. Unset members are no-ops, so the default
/// filter returns the input unchanged.
#[derive(Debug, Clone, Default)]
pub struct ShipmentFilter {
    pub origins: Option<Vec<String>>,
    pub destinations: Option<Vec<String>>,
    pub statuses: Option<Vec<ShipmentStatus>>,
    pub eta_from: Option<NaiveDate>,
    pub eta_to: Option<NaiveDate>,
}

pub fn filter(records: &[Shipment], criteria: &ShipmentFilter) -> Result<Vec<Shipment>> {
    if let (Some(from), Some(to)) = (criteria.eta_from, criteria.eta_to) {
        if from > to {
            return Err(AnalyticsError::InvalidFilterRange { from, to });
        }
    }

    Ok(records
        .iter()
        .filter(|record| matches_filter(record, criteria))
        .cloned()
        .collect())
}

fn matches_filter(record: &Shipment, criteria: &ShipmentFilter) -> bool {
    if let Some(origins) = &criteria.origins {
        if !origins.iter().any(|origin| origin == &record.origin) {
            return false;
        }
    }
    if let Some(destinations) = &criteria.destinations {
        if !destinations
            .iter()
            .any(|destination| destination == &record.destination)
        {
            return false;
        }
    }
    if let Some(statuses) = &criteria.statuses {
        if !statuses.contains(&record.status) {
            return false;
        }
    }
    // ETA window is inclusive on both ends and compares against planned ETA.
    if let Some(from) = criteria.eta_from {
        if record.eta < from {
            return false;
        }
    }
    if let Some(to) = criteria.eta_to {
        if record.eta > to {
            return false;
        }
    }
    true
}

/// Delivery-vs-ETA outcome. Undelivered shipments are a third state, not a
/// failed SLA; their variance is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlaOutcome {
    Met { variance_days: i64 },
    Missed { variance_days: i64 },
    Pending,
}

impl SlaOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlaOutcome::Met { .. } => "met",
            SlaOutcome::Missed { .. } => "missed",
            SlaOutcome::Pending => "pending",
        }
    }

    pub fn variance_days(&self) -> Option<i64> {
        match self {
            SlaOutcome::Met { variance_days } | SlaOutcome::Missed { variance_days } => {
                Some(*variance_days)
            }
            SlaOutcome::Pending => None,
        }
    }
}

pub fn compute_sla(record: &Shipment) -> SlaOutcome {
    match record.delivered_date {
        Some(delivered) => {
            let variance_days = (delivered - record.eta).num_days();
            if delivered <= record.eta {
                SlaOutcome::Met { variance_days }
            } else {
                SlaOutcome::Missed { variance_days }
            }
        }
        None => SlaOutcome::Pending,
    }
}

/// Actual minus planned cost; undefined (not zero) until an actual cost is
/// recorded.
pub fn cost_variance(record: &Shipment) -> Option<Decimal> {
    record
        .actual_cost
        .map(|actual| actual - record.planned_cost)
}

/// Variance as a percentage of planned cost; undefined when the actual cost
/// is absent or the planned cost is zero.
pub fn variance_percent(record: &Shipment) -> Option<f64> {
    let variance = cost_variance(record)?;
    if record.planned_cost.is_zero() {
        return None;
    }
    (variance / record.planned_cost)
        .to_f64()
        .map(|ratio| ratio * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertFlag {
    CostOverrun,
    EtaRisk,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertThresholds {
    #[serde(default = "default_cost_overrun")]
    pub cost_overrun: Decimal,
    #[serde(default = "default_eta_risk_days")]
    pub eta_risk_days: i64,
}

fn default_cost_overrun() -> Decimal {
    Decimal::new(200, 0)
}

fn default_eta_risk_days() -> i64 {
    3
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            cost_overrun: default_cost_overrun(),
            eta_risk_days: default_eta_risk_days(),
        }
    }
}

/// A shipment plus every alert flag it earned. Flags are additive, never
/// mutually exclusive.
#[derive(Debug, Clone)]
pub struct AlertedShipment {
    pub shipment: Shipment,
    pub flags: Vec<AlertFlag>,
}

/// Flags cost overruns and at-risk ETAs. `EtaRisk` covers undelivered,
/// non-terminal shipments whose remaining days to ETA are at or under the
/// threshold, already-overdue (negative remaining days) included.
pub fn flag_alerts(
    records: &[Shipment],
    thresholds: &AlertThresholds,
    now: NaiveDate,
) -> Vec<AlertedShipment> {
    records
        .iter()
        .filter_map(|record| {
            let mut flags = Vec::new();

            if let Some(variance) = cost_variance(record) {
                if variance > thresholds.cost_overrun {
                    flags.push(AlertFlag::CostOverrun);
                }
            }

            if !record.is_delivered() && !record.status.is_terminal() {
                let remaining = (record.eta - now).num_days();
                if remaining <= thresholds.eta_risk_days {
                    flags.push(AlertFlag::EtaRisk);
                }
            }

            (!flags.is_empty()).then(|| AlertedShipment {
                shipment: record.clone(),
                flags,
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl Route {
    pub fn label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RouteCostSummary {
    pub planned_total: Decimal,
    pub actual_total: Decimal,
    pub variance_total: Decimal,
    pub count: usize,
}

/// Groups cost totals by exact (origin, destination) pair, in insertion
/// order of first occurrence.
pub fn aggregate_by_route(records: &[Shipment]) -> Vec<(Route, RouteCostSummary)> {
    let mut order: Vec<Route> = Vec::new();
    let mut summaries: HashMap<Route, RouteCostSummary> = HashMap::new();

    for record in records {
        let route = Route {
            origin: record.origin.clone(),
            destination: record.destination.clone(),
        };
        if !summaries.contains_key(&route) {
            order.push(route.clone());
        }
        let summary = summaries.entry(route).or_default();
        summary.planned_total += record.planned_cost;
        if let Some(actual) = record.actual_cost {
            summary.actual_total += actual;
        }
        if let Some(variance) = cost_variance(record) {
            summary.variance_total += variance;
        }
        summary.count += 1;
    }

    order
        .into_iter()
        .map(|route| {
            let summary = summaries.remove(&route).unwrap_or_default();
            (route, summary)
        })
        .collect()
}

/// Route aggregation sorted by total variance, worst first.
pub fn aggregate_by_route_sorted(records: &[Shipment]) -> Vec<(Route, RouteCostSummary)> {
    let mut routes = aggregate_by_route(records);
    routes.sort_by(|a, b| b.1.variance_total.cmp(&a.1.variance_total));
    routes
}

/// Counts per status; every variant is present even at zero.
pub fn status_breakdown(records: &[Shipment]) -> Vec<(ShipmentStatus, usize)> {
    ShipmentStatus::ALL
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

/// The `n` worst cost overruns, largest variance first. Shipments without a
/// recorded actual cost are skipped.
pub fn top_cost_overruns(records: &[Shipment], n: usize) -> Vec<Shipment> {
    let mut costed: Vec<(Decimal, &Shipment)> = records
        .iter()
        .filter_map(|record| cost_variance(record).map(|variance| (variance, record)))
        .collect();
    costed.sort_by(|a, b| b.0.cmp(&a.0));
    costed
        .into_iter()
        .take(n)
        .map(|(_, record)| record.clone())
        .collect()
}

pub fn export_rows(records: &[Shipment]) -> ExportTable {
    ExportTable {
        headers: vec![
            "Container_ID",
            "Origin_Port",
            "Destination_Port",
            "Status",
            "ETA",
            "Delivered_Date",
            "Cost_Planned",
            "Cost_Actual",
        ],
        rows: records
            .iter()
            .map(|record| {
                vec![
                    record.shipment_id.clone(),
                    record.origin.clone(),
                    record.destination.clone(),
                    record.status.as_str().to_string(),
                    fmt_date(record.eta),
                    fmt_opt_date(record.delivered_date),
                    fmt_decimal(record.planned_cost),
                    fmt_opt_decimal(record.actual_cost),
                ]
            })
            .collect(),
    }
}
