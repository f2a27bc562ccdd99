use chrono::{Duration, NaiveDate};

use seafreight_parser::{Client, DeliveryStatus};

use crate::export::{fmt_opt_date, ExportTable};

pub const DEFAULT_PICKUP_HORIZON_DAYS: i64 = 7;

/// Counts per delivery status; every variant is present even at zero.
pub fn delivery_status_mix(records: &[Client]) -> Vec<(DeliveryStatus, usize)> {
    DeliveryStatus::ALL
        .iter()
        .map(|status| {
            let count = records
                .iter()
                .filter(|record| record.delivery_status == *status)
                .count();
            (*status, count)
        })
        .collect()
}

/// Clients with a pickup date inside [now, now + horizon], inclusive on both
/// ends, soonest first. Clients without a scheduled pickup are excluded.
pub fn upcoming_pickups(records: &[Client], now: NaiveDate, horizon_days: i64) -> Vec<Client> {
    let horizon = now + Duration::days(horizon_days);
    let mut upcoming: Vec<Client> = records
        .iter()
        .filter(|record| {
            record
                .pickup_date
                .map_or(false, |pickup| pickup >= now && pickup <= horizon)
        })
        .cloned()
        .collect();
    upcoming.sort_by_key(|record| record.pickup_date);
    upcoming
}

pub fn export_rows(records: &[Client]) -> ExportTable {
    ExportTable {
        headers: vec![
            "Client_ID",
            "Name",
            "Status",
            "Pickup_Date",
            "Delivery_Address",
        ],
        rows: records
            .iter()
            .map(|record| {
                vec![
                    record.client_id.clone(),
                    record.name.clone(),
                    record.delivery_status.as_str().to_string(),
                    fmt_opt_date(record.pickup_date),
                    record.delivery_address.clone().unwrap_or_default(),
                ]
            })
            .collect(),
    }
}
