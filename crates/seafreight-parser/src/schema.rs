//! Column schemas for the four source tables. The loader walks these specs
//! when coercing raw rows; anything not declared here passes through
//! untouched and unread.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Date,
    Decimal,
    Integer,
    Enum(&'static [&'static str]),
    Text,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub column: &'static str,
    pub ty: FieldType,
    pub required: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub table: &'static str,
    pub fields: &'static [FieldSpec],
}

pub const SHIPMENT_STATUS_VALUES: &[&str] = &[
    "In Transit",
    "Delivered",
    "Delayed",
    "Pending Customs",
    "Cleared",
];

// "Unpaid" is the legacy spelling of Outstanding still present in older exports.
pub const INVOICE_STATUS_VALUES: &[&str] = &["Paid", "Outstanding", "Unpaid", "Overdue"];

pub const DELIVERY_STATUS_VALUES: &[&str] =
    &["Scheduled", "Out For Delivery", "Delivered", "Failed"];

pub const SHIPMENTS: TableSchema = TableSchema {
    table: "shipments",
    fields: &[
        FieldSpec {
            column: "Container_ID",
            ty: FieldType::Text,
            required: true,
        },
        FieldSpec {
            column: "Origin_Port",
            ty: FieldType::Text,
            required: true,
        },
        FieldSpec {
            column: "Destination_Port",
            ty: FieldType::Text,
            required: true,
        },
        FieldSpec {
            column: "Status",
            ty: FieldType::Enum(SHIPMENT_STATUS_VALUES),
            required: true,
        },
        FieldSpec {
            column: "ETA",
            ty: FieldType::Date,
            required: true,
        },
        FieldSpec {
            column: "Delivered_Date",
            ty: FieldType::Date,
            required: false,
        },
        FieldSpec {
            column: "Cost_Planned",
            ty: FieldType::Decimal,
            required: true,
        },
        FieldSpec {
            column: "Cost_Actual",
            ty: FieldType::Decimal,
            required: false,
        },
    ],
};

pub const INVOICES: TableSchema = TableSchema {
    table: "invoices",
    fields: &[
        FieldSpec {
            column: "Invoice_ID",
            ty: FieldType::Text,
            required: true,
        },
        FieldSpec {
            column: "Container_ID",
            ty: FieldType::Text,
            required: true,
        },
        FieldSpec {
            column: "Amount",
            ty: FieldType::Decimal,
            required: true,
        },
        FieldSpec {
            column: "Due_Date",
            ty: FieldType::Date,
            required: true,
        },
        FieldSpec {
            column: "Paid_Status",
            ty: FieldType::Enum(INVOICE_STATUS_VALUES),
            required: true,
        },
        FieldSpec {
            column: "Paid_Amount",
            ty: FieldType::Decimal,
            required: true,
        },
        FieldSpec {
            column: "Payment_Date",
            ty: FieldType::Date,
            required: false,
        },
    ],
};

pub const WAREHOUSE: TableSchema = TableSchema {
    table: "warehouse",
    fields: &[
        FieldSpec {
            column: "Location",
            ty: FieldType::Text,
            required: true,
        },
        FieldSpec {
            column: "SKU",
            ty: FieldType::Text,
            required: true,
        },
        FieldSpec {
            column: "Quantity_On_Hand",
            ty: FieldType::Integer,
            required: true,
        },
        FieldSpec {
            column: "Inbound_Date",
            ty: FieldType::Date,
            required: true,
        },
        FieldSpec {
            column: "Inbound_Qty",
            ty: FieldType::Integer,
            required: true,
        },
    ],
};

pub const CLIENTS: TableSchema = TableSchema {
    table: "clients",
    fields: &[
        FieldSpec {
            column: "Client_ID",
            ty: FieldType::Text,
            required: true,
        },
        FieldSpec {
            column: "Name",
            ty: FieldType::Text,
            required: true,
        },
        FieldSpec {
            column: "Status",
            ty: FieldType::Enum(DELIVERY_STATUS_VALUES),
            required: true,
        },
        FieldSpec {
            column: "Pickup_Date",
            ty: FieldType::Date,
            required: false,
        },
        FieldSpec {
            column: "Delivery_Address",
            ty: FieldType::Text,
            required: false,
        },
    ],
};
