use std::collections::HashMap;
use std::io::Read;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::coerce::{
    check_enum, is_blank, parse_date, parse_decimal, parse_integer, LoaderConfig,
};
use crate::errors::{LoaderError, RowDefect};
use crate::model::{
    Client, DeliveryStatus, Invoice, InvoiceStatus, Shipment, ShipmentStatus, WarehouseRecord,
};
use crate::schema::{self, FieldType, TableSchema};

/// One raw data row: column name to string value, in source column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    columns: Vec<(String, String)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.push((column.into(), value.into()));
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (column, value) in iter {
            row.push(column, value);
        }
        row
    }
}

/// Reads a header row plus data rows from CSV into [`RawRow`]s. Fields are
/// whitespace-trimmed; no type coercion happens here.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawRow>, LoaderError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            row.push(header, value);
        }
        rows.push(row);
    }
    Ok(rows)
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FieldValue {
    Date(NaiveDate),
    Decimal(Decimal),
    Integer(i64),
    Text(String),
}

/// Schema-coerced view of one row. Accessors return a [`RowDefect`] rather
/// than panicking when a column is absent, so record constructors stay
/// explicit about what they require.
#[derive(Debug, Clone, Default)]
pub struct TypedRow {
    values: HashMap<&'static str, FieldValue>,
}

impl TypedRow {
    fn insert(&mut self, column: &'static str, value: FieldValue) {
        self.values.insert(column, value);
    }

    pub fn date(&self, column: &'static str) -> Result<NaiveDate, RowDefect> {
        match self.values.get(column) {
            Some(FieldValue::Date(value)) => Ok(*value),
            _ => Err(RowDefect::MissingField { column }),
        }
    }

    pub fn opt_date(&self, column: &'static str) -> Option<NaiveDate> {
        match self.values.get(column) {
            Some(FieldValue::Date(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn decimal(&self, column: &'static str) -> Result<Decimal, RowDefect> {
        match self.values.get(column) {
            Some(FieldValue::Decimal(value)) => Ok(*value),
            _ => Err(RowDefect::MissingField { column }),
        }
    }

    pub fn opt_decimal(&self, column: &'static str) -> Option<Decimal> {
        match self.values.get(column) {
            Some(FieldValue::Decimal(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn integer(&self, column: &'static str) -> Result<i64, RowDefect> {
        match self.values.get(column) {
            Some(FieldValue::Integer(value)) => Ok(*value),
            _ => Err(RowDefect::MissingField { column }),
        }
    }

    pub fn text(&self, column: &'static str) -> Result<&str, RowDefect> {
        match self.values.get(column) {
            Some(FieldValue::Text(value)) => Ok(value.as_str()),
            _ => Err(RowDefect::MissingField { column }),
        }
    }

    pub fn opt_text(&self, column: &'static str) -> Option<&str> {
        match self.values.get(column) {
            Some(FieldValue::Text(value)) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// A record type loadable from a schema-coerced row.
pub trait FromRow: Sized {
    const SCHEMA: TableSchema;

    fn from_row(row: &TypedRow) -> Result<Self, RowDefect>;
}

/// A rejected source row and every reason it was rejected.
#[derive(Debug, Clone)]
pub struct RejectedRow {
    /// Zero-based data-row index (header excluded).
    pub row_index: usize,
    pub reasons: Vec<RowDefect>,
    pub row: RawRow,
}

/// Valid records plus the rows that failed coercion. One bad row never
/// aborts the batch; callers decide whether to surface the rejects.
#[derive(Debug, Clone)]
pub struct LoadOutcome<T> {
    pub records: Vec<T>,
    pub rejects: Vec<RejectedRow>,
}

/// Coerces raw rows against `T`'s schema, collecting per-row defects.
pub fn load_table<T: FromRow>(rows: &[RawRow], config: &LoaderConfig) -> LoadOutcome<T> {
    let mut records = Vec::with_capacity(rows.len());
    let mut rejects = Vec::new();

    for (row_index, row) in rows.iter().enumerate() {
        let mut defects = Vec::new();
        let mut typed = TypedRow::default();

        for field in T::SCHEMA.fields {
            let raw = row.get(field.column).filter(|value| !is_blank(value));
            let Some(value) = raw else {
                if field.required {
                    defects.push(RowDefect::MissingField {
                        column: field.column,
                    });
                }
                continue;
            };

            let coerced = match field.ty {
                FieldType::Date => parse_date(field.column, value, config).map(FieldValue::Date),
                FieldType::Decimal => {
                    parse_decimal(field.column, value, config).map(FieldValue::Decimal)
                }
                FieldType::Integer => parse_integer(field.column, value).map(FieldValue::Integer),
                FieldType::Enum(allowed) => check_enum(field.column, value, allowed)
                    .map(|()| FieldValue::Text(value.trim().to_string())),
                FieldType::Text => Ok(FieldValue::Text(value.trim().to_string())),
            };

            match coerced {
                Ok(value) => typed.insert(field.column, value),
                Err(defect) => defects.push(defect),
            }
        }

        if defects.is_empty() {
            match T::from_row(&typed) {
                Ok(record) => {
                    records.push(record);
                    continue;
                }
                Err(defect) => defects.push(defect),
            }
        }

        rejects.push(RejectedRow {
            row_index,
            reasons: defects,
            row: row.clone(),
        });
    }

    LoadOutcome { records, rejects }
}

impl FromRow for Shipment {
    const SCHEMA: TableSchema = schema::SHIPMENTS;

    fn from_row(row: &TypedRow) -> Result<Self, RowDefect> {
        let status = ShipmentStatus::try_from(row.text("Status")?)
            .map_err(|message| RowDefect::Invariant { message })?;
        let delivered_date = row.opt_date("Delivered_Date");
        let actual_cost = row.opt_decimal("Cost_Actual");

        Ok(Shipment {
            shipment_id: row.text("Container_ID")?.to_string(),
            origin: row.text("Origin_Port")?.to_string(),
            destination: row.text("Destination_Port")?.to_string(),
            status,
            eta: row.date("ETA")?,
            delivered_date,
            planned_cost: row.decimal("Cost_Planned")?,
            actual_cost,
        })
    }
}

impl FromRow for Invoice {
    const SCHEMA: TableSchema = schema::INVOICES;

    fn from_row(row: &TypedRow) -> Result<Self, RowDefect> {
        let status = InvoiceStatus::try_from(row.text("Paid_Status")?)
            .map_err(|message| RowDefect::Invariant { message })?;
        let amount = row.decimal("Amount")?;
        let paid_amount = row.decimal("Paid_Amount")?;

        if paid_amount > amount {
            return Err(RowDefect::Invariant {
                message: format!("Paid_Amount {paid_amount} exceeds Amount {amount}"),
            });
        }

        Ok(Invoice {
            invoice_id: row.text("Invoice_ID")?.to_string(),
            shipment_id: row.text("Container_ID")?.to_string(),
            amount,
            due_date: row.date("Due_Date")?,
            status,
            paid_amount,
            payment_date: row.opt_date("Payment_Date"),
        })
    }
}

impl FromRow for WarehouseRecord {
    const SCHEMA: TableSchema = schema::WAREHOUSE;

    fn from_row(row: &TypedRow) -> Result<Self, RowDefect> {
        let on_hand = row.integer("Quantity_On_Hand")?;
        let inbound_qty = row.integer("Inbound_Qty")?;

        Ok(WarehouseRecord {
            location: row.text("Location")?.to_string(),
            sku: row.text("SKU")?.to_string(),
            on_hand: u64::try_from(on_hand).map_err(|_| RowDefect::NegativeQuantity {
                column: "Quantity_On_Hand",
                value: on_hand,
            })?,
            inbound_date: row.date("Inbound_Date")?,
            inbound_qty: u64::try_from(inbound_qty).map_err(|_| RowDefect::NegativeQuantity {
                column: "Inbound_Qty",
                value: inbound_qty,
            })?,
        })
    }
}

impl FromRow for Client {
    const SCHEMA: TableSchema = schema::CLIENTS;

    fn from_row(row: &TypedRow) -> Result<Self, RowDefect> {
        let delivery_status = DeliveryStatus::try_from(row.text("Status")?)
            .map_err(|message| RowDefect::Invariant { message })?;

        Ok(Client {
            client_id: row.text("Client_ID")?.to_string(),
            name: row.text("Name")?.to_string(),
            delivery_status,
            pickup_date: row.opt_date("Pickup_Date"),
            delivery_address: row.opt_text("Delivery_Address").map(str::to_string),
        })
    }
}

pub fn load_shipments(rows: &[RawRow], config: &LoaderConfig) -> LoadOutcome<Shipment> {
    load_table(rows, config)
}

pub fn load_invoices(rows: &[RawRow], config: &LoaderConfig) -> LoadOutcome<Invoice> {
    load_table(rows, config)
}

pub fn load_warehouse(rows: &[RawRow], config: &LoaderConfig) -> LoadOutcome<WarehouseRecord> {
    load_table(rows, config)
}

pub fn load_clients(rows: &[RawRow], config: &LoaderConfig) -> LoadOutcome<Client> {
    load_table(rows, config)
}
