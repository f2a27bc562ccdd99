use thiserror::Error;

/// Batch-level loader failures. Row-level problems are never surfaced here;
/// they are collected as [`RowDefect`]s on the rejected rows instead.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("CSV read error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid loader config: {0}")]
    Config(#[from] toml::de::Error),
}

/// A single reason a data row was rejected. One row can carry several.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowDefect {
    #[error("required column '{column}' is missing or blank")]
    MissingField { column: &'static str },

    #[error("column '{column}': '{value}' does not parse as a date with format '{format}'")]
    InvalidDate {
        column: &'static str,
        value: String,
        format: String,
    },

    #[error("column '{column}': '{value}' is not numeric")]
    InvalidNumber { column: &'static str, value: String },

    #[error("column '{column}': '{value}' is not one of {allowed:?}")]
    InvalidEnum {
        column: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("column '{column}': quantity {value} is negative")]
    NegativeQuantity { column: &'static str, value: i64 },

    #[error("{message}")]
    Invariant { message: String },
}
