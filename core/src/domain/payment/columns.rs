use crate::domain::{
    common::entities::app_errors::CoreError,
    filter::columns::{ColumnSpec, ColumnTable, ColumnType},
};

pub fn column_table() -> Result<ColumnTable, CoreError> {
    ColumnTable::new(
        "payments",
        "created_at",
        vec![
            ColumnSpec::new("client", ColumnType::Option).stored_as("client_id"),
            ColumnSpec::new("status", ColumnType::Option).grouped(),
            ColumnSpec::new("payment_method", ColumnType::Option).grouped(),
            ColumnSpec::new("amount", ColumnType::MONEY),
            ColumnSpec::new("paid_at", ColumnType::Date),
            ColumnSpec::new("created_at", ColumnType::Date),
        ],
    )
}
