use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use seafreight_core::clients::{delivery_status_mix, upcoming_pickups};
use seafreight_core::datasets::DatasetStore;

pub fn handle_clients(store: &DatasetStore, now: NaiveDate, horizon_days: i64) -> Result<()> {
    let records = store.clients.records();

    let mut mix = Table::new();
    mix.load_preset(UTF8_FULL);
    mix.set_header(vec!["Delivery status", "Count"]);
    for (status, count) in delivery_status_mix(records) {
        mix.add_row(vec![status.to_string(), count.to_string()]);
    }
    println!("Delivery status mix");
    println!("{mix}");

    let upcoming = upcoming_pickups(records, now, horizon_days);
    if upcoming.is_empty() {
        println!("No pickups in the next {horizon_days} days.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Client", "Name", "Pickup", "Address", "Status"]);
    for record in &upcoming {
        table.add_row(vec![
            record.client_id.clone(),
            record.name.clone(),
            record
                .pickup_date
                .map(|date| date.to_string())
                .unwrap_or_default(),
            record.delivery_address.clone().unwrap_or_default(),
            record.delivery_status.to_string(),
        ]);
    }
    println!("Upcoming pickups (≤ {horizon_days} days)");
    println!("{table}");

    Ok(())
}
