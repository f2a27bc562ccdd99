use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("invalid filter range: ETA window start {from} is after end {to}")]
    InvalidFilterRange { from: NaiveDate, to: NaiveDate },

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("loader error: {0}")]
    Loader(#[from] seafreight_parser::LoaderError),

    #[error("export failed: {0}")]
    Export(String),
}

pub type Result<T> = std::result::Result<T, AnalyticsError>;
