use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{AnalyticsError, Result};

/// A flat header-plus-rows table ready for CSV download. Decimals are fixed
/// at two places and dates are ISO 8601; optional fields export as empty
/// strings so the loader round-trips them back to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer
            .into_inner()
            .map_err(|err| AnalyticsError::Export(err.to_string()))
    }
}

pub(crate) fn fmt_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub(crate) fn fmt_opt_date(date: Option<NaiveDate>) -> String {
    date.map(fmt_date).unwrap_or_default()
}

pub(crate) fn fmt_decimal(value: Decimal) -> String {
    format!("{value:.2}")
}

pub(crate) fn fmt_opt_decimal(value: Option<Decimal>) -> String {
    value.map(fmt_decimal).unwrap_or_default()
}
