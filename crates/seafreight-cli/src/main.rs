// crates/seafreight-cli/src/main.rs

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::path::PathBuf;

mod commands;

use commands::warehouse::BucketArg;
use commands::Settings;

/// A terminal dashboard over the SeaFreight analytics core.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding shipments.csv, invoices.csv, warehouse.csv and clients.csv.
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Optional TOML file with loader formats and alert thresholds.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override "today" for ETA-risk and pickup windows (YYYY-MM-DD).
    #[arg(long)]
    now: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the KPI strip across all four datasets.
    Kpis {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Filtered shipment tracker with alerts and route variance.
    Shipments {
        /// Keep only these origin ports (repeatable).
        #[arg(long)]
        origin: Vec<String>,
        /// Keep only these destination ports (repeatable).
        #[arg(long)]
        destination: Vec<String>,
        /// Keep only these statuses (repeatable), e.g. "In Transit".
        #[arg(long)]
        status: Vec<String>,
        /// Inclusive start of the planned-ETA window.
        #[arg(long)]
        eta_from: Option<NaiveDate>,
        /// Inclusive end of the planned-ETA window.
        #[arg(long)]
        eta_to: Option<NaiveDate>,
    },
    /// Invoice overview: payment mix, outstanding, KPIs.
    Invoices,
    /// Warehouse inbound trend and on-hand inventory.
    Warehouse {
        #[arg(long, value_enum, default_value_t = BucketArg::Week)]
        bucket: BucketArg,
    },
    /// Client delivery mix and upcoming pickups.
    Clients {
        #[arg(long, default_value_t = 7)]
        horizon_days: i64,
    },
    /// Write CSV exports (filtered shipments, outstanding invoices, clients).
    Export {
        #[arg(short, long, default_value = "exports")]
        out_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    let store = commands::data::load_store(&cli.data_dir, &settings.loader)?;
    let now = cli.now.unwrap_or_else(|| Local::now().date_naive());

    match cli.command {
        Commands::Kpis { json } => commands::kpis::handle_kpis(&store, json)?,
        Commands::Shipments {
            origin,
            destination,
            status,
            eta_from,
            eta_to,
        } => commands::shipments::handle_shipments(
            &store,
            &settings,
            commands::shipments::ShipmentQuery {
                origins: origin,
                destinations: destination,
                statuses: status,
                eta_from,
                eta_to,
            },
            now,
        )?,
        Commands::Invoices => commands::invoices::handle_invoices(&store)?,
        Commands::Warehouse { bucket } => {
            commands::warehouse::handle_warehouse(&store, bucket)?
        }
        Commands::Clients { horizon_days } => {
            commands::clients::handle_clients(&store, now, horizon_days)?
        }
        Commands::Export { out_dir } => commands::export::handle_export(&store, &out_dir)?,
    }

    Ok(())
}
