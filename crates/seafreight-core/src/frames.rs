//! Presentation-boundary tables. The rendering layer consumes plain
//! DataFrames; dates are emitted as ISO strings and decimals as floats so
//! charting needs no further conversion.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use seafreight_parser::{Client, Invoice, Shipment, WarehouseRecord};

use crate::error::Result;
use crate::export::{fmt_date, fmt_opt_date};
use crate::shipments::{compute_sla, cost_variance, variance_percent, Route, RouteCostSummary};

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Shipment table enriched with the derived route, variance, and SLA
/// columns, one row per shipment.
pub fn shipment_frame(records: &[Shipment]) -> Result<DataFrame> {
    let capacity = records.len();
    let mut container_id = Vec::with_capacity(capacity);
    let mut route = Vec::with_capacity(capacity);
    let mut status = Vec::with_capacity(capacity);
    let mut eta = Vec::with_capacity(capacity);
    let mut delivered_date: Vec<Option<String>> = Vec::with_capacity(capacity);
    let mut cost_planned = Vec::with_capacity(capacity);
    let mut cost_actual: Vec<Option<f64>> = Vec::with_capacity(capacity);
    let mut variance: Vec<Option<f64>> = Vec::with_capacity(capacity);
    let mut variance_pct: Vec<Option<f64>> = Vec::with_capacity(capacity);
    let mut sla = Vec::with_capacity(capacity);
    let mut variance_days: Vec<Option<i64>> = Vec::with_capacity(capacity);

    for record in records {
        container_id.push(record.shipment_id.as_str());
        route.push(record.route_label());
        status.push(record.status.as_str());
        eta.push(fmt_date(record.eta));
        delivered_date.push(record.delivered_date.map(fmt_date));
        cost_planned.push(decimal_to_f64(record.planned_cost));
        cost_actual.push(record.actual_cost.map(decimal_to_f64));
        variance.push(cost_variance(record).map(decimal_to_f64));
        // rounded to one decimal for display, matching the source dashboard
        variance_pct.push(variance_percent(record).map(|pct| (pct * 10.0).round() / 10.0));
        let outcome = compute_sla(record);
        sla.push(outcome.as_str());
        variance_days.push(outcome.variance_days());
    }

    let delivered_date: Vec<Option<&str>> =
        delivered_date.iter().map(|value| value.as_deref()).collect();

    let columns: Vec<Column> = vec![
        Series::new("container_id".into(), container_id).into(),
        Series::new("route".into(), route).into(),
        Series::new("status".into(), status).into(),
        Series::new("eta".into(), eta).into(),
        Series::new("delivered_date".into(), delivered_date).into(),
        Series::new("cost_planned".into(), cost_planned).into(),
        Series::new("cost_actual".into(), cost_actual).into(),
        Series::new("cost_variance".into(), variance).into(),
        Series::new("variance_percent".into(), variance_pct).into(),
        Series::new("sla".into(), sla).into(),
        Series::new("variance_days".into(), variance_days).into(),
    ];

    Ok(DataFrame::new(columns)?)
}

pub fn invoice_frame(records: &[Invoice]) -> Result<DataFrame> {
    let capacity = records.len();
    let mut invoice_id = Vec::with_capacity(capacity);
    let mut container_id = Vec::with_capacity(capacity);
    let mut amount = Vec::with_capacity(capacity);
    let mut due_date = Vec::with_capacity(capacity);
    let mut status = Vec::with_capacity(capacity);
    let mut paid_amount = Vec::with_capacity(capacity);
    let mut balance = Vec::with_capacity(capacity);
    let mut payment_date: Vec<Option<String>> = Vec::with_capacity(capacity);

    for record in records {
        invoice_id.push(record.invoice_id.as_str());
        container_id.push(record.shipment_id.as_str());
        amount.push(decimal_to_f64(record.amount));
        due_date.push(fmt_date(record.due_date));
        status.push(record.status.as_str());
        paid_amount.push(decimal_to_f64(record.paid_amount));
        balance.push(decimal_to_f64(record.balance()));
        payment_date.push(record.payment_date.map(fmt_date));
    }

    let payment_date: Vec<Option<&str>> =
        payment_date.iter().map(|value| value.as_deref()).collect();

    let columns: Vec<Column> = vec![
        Series::new("invoice_id".into(), invoice_id).into(),
        Series::new("container_id".into(), container_id).into(),
        Series::new("amount".into(), amount).into(),
        Series::new("due_date".into(), due_date).into(),
        Series::new("status".into(), status).into(),
        Series::new("paid_amount".into(), paid_amount).into(),
        Series::new("balance".into(), balance).into(),
        Series::new("payment_date".into(), payment_date).into(),
    ];

    Ok(DataFrame::new(columns)?)
}

pub fn warehouse_frame(records: &[WarehouseRecord]) -> Result<DataFrame> {
    let capacity = records.len();
    let mut location = Vec::with_capacity(capacity);
    let mut sku = Vec::with_capacity(capacity);
    let mut on_hand = Vec::with_capacity(capacity);
    let mut inbound_date = Vec::with_capacity(capacity);
    let mut inbound_qty = Vec::with_capacity(capacity);

    for record in records {
        location.push(record.location.as_str());
        sku.push(record.sku.as_str());
        on_hand.push(record.on_hand as i64);
        inbound_date.push(fmt_date(record.inbound_date));
        inbound_qty.push(record.inbound_qty as i64);
    }

    let columns: Vec<Column> = vec![
        Series::new("location".into(), location).into(),
        Series::new("sku".into(), sku).into(),
        Series::new("on_hand".into(), on_hand).into(),
        Series::new("inbound_date".into(), inbound_date).into(),
        Series::new("inbound_qty".into(), inbound_qty).into(),
    ];

    Ok(DataFrame::new(columns)?)
}

pub fn client_frame(records: &[Client]) -> Result<DataFrame> {
    let capacity = records.len();
    let mut client_id = Vec::with_capacity(capacity);
    let mut name = Vec::with_capacity(capacity);
    let mut status = Vec::with_capacity(capacity);
    let mut pickup_date = Vec::with_capacity(capacity);
    let mut delivery_address: Vec<Option<&str>> = Vec::with_capacity(capacity);

    for record in records {
        client_id.push(record.client_id.as_str());
        name.push(record.name.as_str());
        status.push(record.delivery_status.as_str());
        pickup_date.push(fmt_opt_date(record.pickup_date));
        delivery_address.push(record.delivery_address.as_deref());
    }

    let columns: Vec<Column> = vec![
        Series::new("client_id".into(), client_id).into(),
        Series::new("name".into(), name).into(),
        Series::new("status".into(), status).into(),
        Series::new("pickup_date".into(), pickup_date).into(),
        Series::new("delivery_address".into(), delivery_address).into(),
    ];

    Ok(DataFrame::new(columns)?)
}

/// Tabulates a route aggregation for the route-variance chart.
pub fn route_frame(routes: &[(Route, RouteCostSummary)]) -> Result<DataFrame> {
    let capacity = routes.len();
    let mut route = Vec::with_capacity(capacity);
    let mut planned_total = Vec::with_capacity(capacity);
    let mut actual_total = Vec::with_capacity(capacity);
    let mut variance_total = Vec::with_capacity(capacity);
    let mut count = Vec::with_capacity(capacity);

    for (key, summary) in routes {
        route.push(key.label());
        planned_total.push(decimal_to_f64(summary.planned_total));
        actual_total.push(decimal_to_f64(summary.actual_total));
        variance_total.push(decimal_to_f64(summary.variance_total));
        count.push(summary.count as i64);
    }

    let columns: Vec<Column> = vec![
        Series::new("route".into(), route).into(),
        Series::new("planned_total".into(), planned_total).into(),
        Series::new("actual_total".into(), actual_total).into(),
        Series::new("variance_total".into(), variance_total).into(),
        Series::new("count".into(), count).into(),
    ];

    Ok(DataFrame::new(columns)?)
}

/// Tabulates an inbound trend series for the trend chart.
pub fn trend_frame(series: &[(chrono::NaiveDate, u64)]) -> Result<DataFrame> {
    let mut bucket_start = Vec::with_capacity(series.len());
    let mut inbound_qty = Vec::with_capacity(series.len());
    for (start, quantity) in series {
        bucket_start.push(fmt_date(*start));
        inbound_qty.push(*quantity as i64);
    }

    let columns: Vec<Column> = vec![
        Series::new("bucket_start".into(), bucket_start).into(),
        Series::new("inbound_qty".into(), inbound_qty).into(),
    ];

    Ok(DataFrame::new(columns)?)
}
