use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// Enum parsing is tolerant of case and separators: "In_Transit", "IN TRANSIT"
// and "in transit" all name the same status.
use crate::coerce::normalize_token as normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipmentStatus {
    InTransit,
    Delivered,
    Delayed,
    PendingCustoms,
    Cleared,
}

impl ShipmentStatus {
    pub const ALL: [ShipmentStatus; 5] = [
        ShipmentStatus::InTransit,
        ShipmentStatus::Delivered,
        ShipmentStatus::Delayed,
        ShipmentStatus::PendingCustoms,
        ShipmentStatus::Cleared,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::Delivered => "Delivered",
            ShipmentStatus::Delayed => "Delayed",
            ShipmentStatus::PendingCustoms => "Pending Customs",
            ShipmentStatus::Cleared => "Cleared",
        }
    }

    /// Statuses counted against the delayed-percentage KPI.
    pub fn is_delayed(&self) -> bool {
        matches!(self, ShipmentStatus::Delayed | ShipmentStatus::PendingCustoms)
    }

    /// No further transit expected; excluded from ETA-risk alerting.
    pub fn is_terminal(&self) -> bool {
        matches!(self, ShipmentStatus::Delivered | ShipmentStatus::Cleared)
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ShipmentStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize(value).as_str() {
            "in transit" => Ok(ShipmentStatus::InTransit),
            "delivered" => Ok(ShipmentStatus::Delivered),
            "delayed" => Ok(ShipmentStatus::Delayed),
            "pending customs" => Ok(ShipmentStatus::PendingCustoms),
            "cleared" => Ok(ShipmentStatus::Cleared),
            other => Err(format!("unknown shipment status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvoiceStatus {
    Paid,
    Outstanding,
    Overdue,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 3] = [
        InvoiceStatus::Paid,
        InvoiceStatus::Outstanding,
        InvoiceStatus::Overdue,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Outstanding => "Outstanding",
            InvoiceStatus::Overdue => "Overdue",
        }
    }

    /// Outstanding and Overdue invoices still carry an open balance.
    pub fn is_open(&self) -> bool {
        matches!(self, InvoiceStatus::Outstanding | InvoiceStatus::Overdue)
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for InvoiceStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize(value).as_str() {
            "paid" => Ok(InvoiceStatus::Paid),
            // legacy exports label open invoices "Unpaid"
            "outstanding" | "unpaid" => Ok(InvoiceStatus::Outstanding),
            "overdue" => Ok(InvoiceStatus::Overdue),
            other => Err(format!("unknown payment status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Scheduled,
    OutForDelivery,
    Delivered,
    Failed,
}

impl DeliveryStatus {
    pub const ALL: [DeliveryStatus; 4] = [
        DeliveryStatus::Scheduled,
        DeliveryStatus::OutForDelivery,
        DeliveryStatus::Delivered,
        DeliveryStatus::Failed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Scheduled => "Scheduled",
            DeliveryStatus::OutForDelivery => "Out For Delivery",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for DeliveryStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match normalize(value).as_str() {
            "scheduled" => Ok(DeliveryStatus::Scheduled),
            "out for delivery" => Ok(DeliveryStatus::OutForDelivery),
            "delivered" => Ok(DeliveryStatus::Delivered),
            "failed" => Ok(DeliveryStatus::Failed),
            other => Err(format!("unknown delivery status '{other}'")),
        }
    }
}

/// One sea-freight container movement. `delivered_date` stays absent until
/// delivery is recorded; everything derived from it (SLA, variance) is
/// recomputed, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    pub shipment_id: String,
    pub origin: String,
    pub destination: String,
    pub status: ShipmentStatus,
    pub eta: NaiveDate,
    pub delivered_date: Option<NaiveDate>,
    pub planned_cost: Decimal,
    pub actual_cost: Option<Decimal>,
}

impl Shipment {
    /// "Origin → Destination" label used by route-level views.
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered_date.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: String,
    pub shipment_id: String,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub paid_amount: Decimal,
    pub payment_date: Option<NaiveDate>,
}

impl Invoice {
    /// Open balance; zero for fully paid invoices.
    pub fn balance(&self) -> Decimal {
        self.amount - self.paid_amount
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarehouseRecord {
    pub location: String,
    pub sku: String,
    pub on_hand: u64,
    pub inbound_date: NaiveDate,
    pub inbound_qty: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub client_id: String,
    pub name: String,
    pub delivery_status: DeliveryStatus,
    pub pickup_date: Option<NaiveDate>,
    pub delivery_address: Option<String>,
}
