use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use seafreight_core::datasets::DatasetStore;
use seafreight_core::kpis::dashboard_kpis;

pub fn handle_kpis(store: &DatasetStore, json: bool) -> Result<()> {
    let kpis = dashboard_kpis(
        store.shipments.records(),
        store.invoices.records(),
        store.warehouse.records(),
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&kpis)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        "Total shipments".to_string(),
        kpis.total_shipments.to_string(),
    ]);
    table.add_row(vec![
        "Delayed %".to_string(),
        format!("{:.1}%", kpis.delayed_percent),
    ]);
    table.add_row(vec![
        "Planned cost".to_string(),
        format!("${:.2}", kpis.planned_cost_total),
    ]);
    table.add_row(vec![
        "Actual cost".to_string(),
        format!("${:.2}", kpis.actual_cost_total),
    ]);
    table.add_row(vec![
        "Cost variance".to_string(),
        format!(
            "${:.2} ({:.1}%)",
            kpis.cost_variance_total, kpis.cost_variance_percent
        ),
    ]);
    table.add_row(vec![
        "Invoices paid".to_string(),
        format!("{:.1}%", kpis.invoices_paid_percent),
    ]);
    table.add_row(vec![
        "Outstanding $".to_string(),
        format!("${:.2}", kpis.outstanding_value),
    ]);
    table.add_row(vec![
        "On-time SLA".to_string(),
        format!("{:.1}%", kpis.on_time_sla_percent),
    ]);
    table.add_row(vec![
        "Inventory on hand".to_string(),
        kpis.on_hand_total.to_string(),
    ]);

    println!("{table}");
    Ok(())
}
