use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::{LoaderError, RowDefect};

/// Source formats are configuration, not code: exports from other regions
/// arrive with day-first dates and comma decimals.
#[derive(Debug, Clone, Deserialize)]
pub struct LoaderConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_decimal_separator() -> char {
    '.'
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl LoaderConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, LoaderError> {
        Ok(toml::from_str(raw)?)
    }
}

/// Lowercased, underscore-to-space, whitespace-collapsed comparison token.
pub(crate) fn normalize_token(value: &str) -> String {
    value
        .trim()
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_ascii_lowercase()
}

/// Tokens pandas-style exports write for absent values.
pub(crate) fn is_blank(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("nat")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
}

pub(crate) fn parse_date(
    column: &'static str,
    value: &str,
    config: &LoaderConfig,
) -> Result<NaiveDate, RowDefect> {
    NaiveDate::parse_from_str(value.trim(), &config.date_format).map_err(|_| {
        RowDefect::InvalidDate {
            column,
            value: value.trim().to_string(),
            format: config.date_format.clone(),
        }
    })
}

pub(crate) fn parse_decimal(
    column: &'static str,
    value: &str,
    config: &LoaderConfig,
) -> Result<Decimal, RowDefect> {
    let trimmed = value.trim();
    let normalized = if config.decimal_separator == '.' {
        trimmed.to_string()
    } else {
        trimmed.replace(config.decimal_separator, ".")
    };
    Decimal::from_str(&normalized).map_err(|_| RowDefect::InvalidNumber {
        column,
        value: trimmed.to_string(),
    })
}

pub(crate) fn parse_integer(column: &'static str, value: &str) -> Result<i64, RowDefect> {
    let trimmed = value.trim();
    let parsed = trimmed
        .parse::<i64>()
        .map_err(|_| RowDefect::InvalidNumber {
            column,
            value: trimmed.to_string(),
        })?;
    if parsed < 0 {
        return Err(RowDefect::NegativeQuantity {
            column,
            value: parsed,
        });
    }
    Ok(parsed)
}

pub(crate) fn check_enum(
    column: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) -> Result<(), RowDefect> {
    let token = normalize_token(value);
    if allowed.iter().any(|candidate| normalize_token(candidate) == token) {
        Ok(())
    } else {
        Err(RowDefect::InvalidEnum {
            column,
            value: value.trim().to_string(),
            allowed,
        })
    }
}
