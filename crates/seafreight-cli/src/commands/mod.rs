use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use seafreight_core::parser::LoaderConfig;
use seafreight_core::shipments::AlertThresholds;

pub mod clients;
pub mod data;
pub mod export;
pub mod invoices;
pub mod kpis;
pub mod shipments;
pub mod warehouse;

/// CLI settings file: loader formats plus alert thresholds, all optional.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub alerts: AlertThresholds,
}

impl Settings {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}
