use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use seafreight_core::datasets::DatasetStore;
use seafreight_core::invoices::{kpis, outstanding, status_breakdown};

pub fn handle_invoices(store: &DatasetStore) -> Result<()> {
    let records = store.invoices.records();

    let mut breakdown = Table::new();
    breakdown.load_preset(UTF8_FULL);
    breakdown.set_header(vec!["Payment status", "Count"]);
    for (status, count) in status_breakdown(records) {
        breakdown.add_row(vec![status.to_string(), count.to_string()]);
    }
    println!("Payment status");
    println!("{breakdown}");

    let summary = kpis(records);
    println!(
        "Paid: {:.1}%  |  Outstanding: ${:.2}  |  Overdue at risk: ${:.2}",
        summary.paid_percent, summary.outstanding_value, summary.overdue_value
    );

    let open = outstanding(records);
    if open.is_empty() {
        println!("No outstanding invoices.");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Invoice", "Container", "Amount", "Balance", "Due", "Status"]);
    for record in &open {
        table.add_row(vec![
            record.invoice_id.clone(),
            record.shipment_id.clone(),
            format!("{:.2}", record.amount),
            format!("{:.2}", record.balance()),
            record.due_date.to_string(),
            record.status.to_string(),
        ]);
    }
    println!("Outstanding by due date");
    println!("{table}");

    Ok(())
}
