pub mod clients;
pub mod datasets;
pub mod error;
pub mod export;
pub mod frames;
pub mod invoices;
pub mod kpis;
pub mod shipments;
pub mod warehouse;

pub use error::{AnalyticsError, Result};
pub use seafreight_parser as parser;
