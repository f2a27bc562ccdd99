use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use seafreight_core::datasets::DatasetStore;
use seafreight_core::warehouse::{inbound_trend, on_hand_by_location, total_on_hand, TrendBucket};

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum BucketArg {
    Day,
    Week,
    Month,
}

impl From<BucketArg> for TrendBucket {
    fn from(value: BucketArg) -> Self {
        match value {
            BucketArg::Day => TrendBucket::Day,
            BucketArg::Week => TrendBucket::Week,
            BucketArg::Month => TrendBucket::Month,
        }
    }
}

pub fn handle_warehouse(store: &DatasetStore, bucket: BucketArg) -> Result<()> {
    let records = store.warehouse.records();

    let mut trend = Table::new();
    trend.load_preset(UTF8_FULL);
    trend.set_header(vec!["Bucket start", "Inbound qty"]);
    for (start, quantity) in inbound_trend(records, bucket.into()) {
        trend.add_row(vec![start.to_string(), quantity.to_string()]);
    }
    println!("Inbound quantity over time");
    println!("{trend}");

    let mut by_location = Table::new();
    by_location.load_preset(UTF8_FULL);
    by_location.set_header(vec!["Location", "On hand"]);
    for (location, quantity) in on_hand_by_location(records) {
        by_location.add_row(vec![location, quantity.to_string()]);
    }
    println!("Quantity by location");
    println!("{by_location}");

    println!("Inventory on hand (latest snapshots): {}", total_on_hand(records));
    Ok(())
}
