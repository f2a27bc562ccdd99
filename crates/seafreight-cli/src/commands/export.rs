use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use seafreight_core::datasets::DatasetStore;
use seafreight_core::export::ExportTable;
use seafreight_core::{clients, invoices, shipments};

/// Writes the downloadable CSVs: the full shipment tracker, outstanding
/// invoices, and the client register.
pub fn handle_export(store: &DatasetStore, out_dir: &Path) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    write_table(
        out_dir,
        "shipments.csv",
        &shipments::export_rows(store.shipments.records()),
    )?;
    write_table(
        out_dir,
        "outstanding_invoices.csv",
        &invoices::export_rows(&invoices::outstanding(store.invoices.records())),
    )?;
    write_table(
        out_dir,
        "clients.csv",
        &clients::export_rows(store.clients.records()),
    )?;

    Ok(())
}

fn write_table(out_dir: &Path, name: &str, table: &ExportTable) -> Result<()> {
    let path = out_dir.join(name);
    let bytes = table.to_csv_bytes()?;
    fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    info!(file = %path.display(), rows = table.rows.len(), "wrote export");
    Ok(())
}
