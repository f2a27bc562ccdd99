use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use seafreight_core::datasets::DatasetStore;
use seafreight_core::parser::{LoaderConfig, RejectedRow};

/// Loads the four datasets from `<dir>/{shipments,invoices,warehouse,clients}.csv`
/// into a fresh store, warning about any rejected rows.
pub fn load_store(dir: &Path, config: &LoaderConfig) -> Result<DatasetStore> {
    let mut store = DatasetStore::new();

    let shipments = read_file(dir, "shipments.csv")?;
    store.shipments.load(&shipments, config)?;
    report_rejects("shipments", store.shipments.rejects());

    let invoices = read_file(dir, "invoices.csv")?;
    store.invoices.load(&invoices, config)?;
    report_rejects("invoices", store.invoices.rejects());

    let warehouse = read_file(dir, "warehouse.csv")?;
    store.warehouse.load(&warehouse, config)?;
    report_rejects("warehouse", store.warehouse.rejects());

    let clients = read_file(dir, "clients.csv")?;
    store.clients.load(&clients, config)?;
    report_rejects("clients", store.clients.rejects());

    Ok(store)
}

fn read_file(dir: &Path, name: &str) -> Result<Vec<u8>> {
    let path = dir.join(name);
    fs::read(&path).with_context(|| format!("failed to read {}", path.display()))
}

fn report_rejects(table: &str, rejects: &[RejectedRow]) {
    if rejects.is_empty() {
        return;
    }
    warn!(table, count = rejects.len(), "rejected malformed rows");
    for reject in rejects {
        let reasons: Vec<String> = reject
            .reasons
            .iter()
            .map(|reason| reason.to_string())
            .collect();
        warn!(
            table,
            row = reject.row_index,
            reasons = reasons.join("; "),
            "rejected row"
        );
    }
}
