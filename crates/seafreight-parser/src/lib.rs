pub mod coerce;
pub mod errors;
pub mod loader;
pub mod model;
pub mod schema;

pub use coerce::LoaderConfig;
pub use errors::{LoaderError, RowDefect};
pub use loader::{
    load_clients, load_invoices, load_shipments, load_table, load_warehouse, read_rows, FromRow,
    LoadOutcome, RawRow, RejectedRow,
};
pub use model::{
    Client, DeliveryStatus, Invoice, InvoiceStatus, Shipment, ShipmentStatus, WarehouseRecord,
};
