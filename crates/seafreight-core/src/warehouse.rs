use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::Serialize;

use seafreight_parser::WarehouseRecord;

/// Calendar-aligned trend granularity: weeks start Monday, months on the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendBucket {
    Day,
    Week,
    Month,
}

impl TrendBucket {
    fn align(&self, date: NaiveDate) -> NaiveDate {
        match self {
            TrendBucket::Day => date,
            TrendBucket::Week => date.week(Weekday::Mon).first_day(),
            TrendBucket::Month => date.with_day(1).unwrap_or(date),
        }
    }

    fn advance(&self, date: NaiveDate) -> Option<NaiveDate> {
        match self {
            TrendBucket::Day => date.succ_opt(),
            TrendBucket::Week => date.checked_add_days(Days::new(7)),
            TrendBucket::Month => date.checked_add_months(Months::new(1)),
        }
    }
}

/// Total inbound quantity per calendar bucket. The series is contiguous over
/// the observed range: buckets with no inbound rows appear with a zero
/// quantity. Empty input yields an empty series.
pub fn inbound_trend(records: &[WarehouseRecord], bucket: TrendBucket) -> Vec<(NaiveDate, u64)> {
    let mut totals: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for record in records {
        *totals.entry(bucket.align(record.inbound_date)).or_insert(0) += record.inbound_qty;
    }

    let (Some((&first, _)), Some((&last, _))) = (totals.first_key_value(), totals.last_key_value())
    else {
        return Vec::new();
    };

    let mut series = Vec::new();
    let mut cursor = first;
    while cursor <= last {
        series.push((cursor, totals.get(&cursor).copied().unwrap_or(0)));
        match bucket.advance(cursor) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    series
}

/// Total quantity on hand per location, summing the most recent snapshot per
/// (location, SKU). Last write wins by inbound date; equal dates resolve to
/// the later input row. Sorted by quantity descending, then location name.
pub fn on_hand_by_location(records: &[WarehouseRecord]) -> Vec<(String, u64)> {
    let mut latest: HashMap<(&str, &str), (NaiveDate, u64)> = HashMap::new();
    for record in records {
        let key = (record.location.as_str(), record.sku.as_str());
        match latest.get(&key) {
            Some((snapshot_date, _)) if *snapshot_date > record.inbound_date => {}
            _ => {
                latest.insert(key, (record.inbound_date, record.on_hand));
            }
        }
    }

    let mut totals: HashMap<&str, u64> = HashMap::new();
    for ((location, _), (_, on_hand)) in &latest {
        *totals.entry(location).or_insert(0) += on_hand;
    }

    let mut ranked: Vec<(String, u64)> = totals
        .into_iter()
        .map(|(location, quantity)| (location.to_string(), quantity))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Grand total across locations, for the KPI strip.
pub fn total_on_hand(records: &[WarehouseRecord]) -> u64 {
    on_hand_by_location(records)
        .iter()
        .map(|(_, quantity)| quantity)
        .sum()
}
