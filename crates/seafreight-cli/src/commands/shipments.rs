use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use seafreight_core::datasets::DatasetStore;
use seafreight_core::shipments::{
    aggregate_by_route_sorted, compute_sla, cost_variance, filter, flag_alerts, status_breakdown,
    AlertFlag, ShipmentFilter,
};
use seafreight_core::parser::{Shipment, ShipmentStatus};

use super::Settings;

/// Raw filter flags as typed on the command line.
#[derive(Debug, Default)]
pub struct ShipmentQuery {
    pub origins: Vec<String>,
    pub destinations: Vec<String>,
    pub statuses: Vec<String>,
    pub eta_from: Option<NaiveDate>,
    pub eta_to: Option<NaiveDate>,
}

impl ShipmentQuery {
    fn into_filter(self) -> Result<ShipmentFilter> {
        let statuses = if self.statuses.is_empty() {
            None
        } else {
            Some(
                self.statuses
                    .iter()
                    .map(|raw| ShipmentStatus::try_from(raw.as_str()).map_err(|err| anyhow!(err)))
                    .collect::<Result<Vec<_>>>()?,
            )
        };

        Ok(ShipmentFilter {
            origins: (!self.origins.is_empty()).then_some(self.origins),
            destinations: (!self.destinations.is_empty()).then_some(self.destinations),
            statuses,
            eta_from: self.eta_from,
            eta_to: self.eta_to,
        })
    }
}

pub fn handle_shipments(
    store: &DatasetStore,
    settings: &Settings,
    query: ShipmentQuery,
    now: NaiveDate,
) -> Result<()> {
    let criteria = query.into_filter()?;
    let filtered = filter(store.shipments.records(), &criteria)?;

    println!("Shipment tracker ({} rows)", filtered.len());
    println!("{}", tracker_table(&filtered));

    let mut breakdown = Table::new();
    breakdown.load_preset(UTF8_FULL);
    breakdown.set_header(vec!["Status", "Count"]);
    for (status, count) in status_breakdown(&filtered) {
        breakdown.add_row(vec![status.to_string(), count.to_string()]);
    }
    println!("Status breakdown");
    println!("{breakdown}");

    let mut routes = Table::new();
    routes.load_preset(UTF8_FULL);
    routes.set_header(vec!["Route", "Planned", "Actual", "Variance", "Shipments"]);
    for (route, summary) in aggregate_by_route_sorted(&filtered) {
        routes.add_row(vec![
            route.label(),
            format!("{:.2}", summary.planned_total),
            format!("{:.2}", summary.actual_total),
            format!("{:.2}", summary.variance_total),
            summary.count.to_string(),
        ]);
    }
    println!("Cost variance by route (worst first)");
    println!("{routes}");

    let alerts = flag_alerts(&filtered, &settings.alerts, now);
    if alerts.is_empty() {
        println!("No alerts for the current filter.");
        return Ok(());
    }

    let mut alert_table = Table::new();
    alert_table.load_preset(UTF8_FULL);
    alert_table.set_header(vec!["Container", "Route", "ETA", "Flags"]);
    for alert in &alerts {
        let flags: Vec<&str> = alert
            .flags
            .iter()
            .map(|flag| match flag {
                AlertFlag::CostOverrun => "cost overrun",
                AlertFlag::EtaRisk => "ETA risk",
            })
            .collect();
        alert_table.add_row(vec![
            alert.shipment.shipment_id.clone(),
            alert.shipment.route_label(),
            alert.shipment.eta.to_string(),
            flags.join(", "),
        ]);
    }
    println!("Alerts");
    println!("{alert_table}");

    Ok(())
}

fn tracker_table(records: &[Shipment]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Container",
        "Route",
        "Status",
        "ETA",
        "Delivered",
        "Planned",
        "Actual",
        "Variance",
        "SLA",
    ]);
    for record in records {
        let variance = cost_variance(record)
            .map(|value| format!("{value:.2}"))
            .unwrap_or_default();
        let actual = record
            .actual_cost
            .map(|value| format!("{value:.2}"))
            .unwrap_or_default();
        let delivered = record
            .delivered_date
            .map(|date| date.to_string())
            .unwrap_or_default();
        table.add_row(vec![
            record.shipment_id.clone(),
            record.route_label(),
            record.status.to_string(),
            record.eta.to_string(),
            delivered,
            format!("{:.2}", record.planned_cost),
            actual,
            variance,
            compute_sla(record).as_str().to_string(),
        ]);
    }
    table
}
