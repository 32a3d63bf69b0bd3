use crate::domain::{
    common::entities::app_errors::CoreError,
    filter::columns::{ColumnSpec, ColumnTable, ColumnType},
};

pub fn column_table() -> Result<ColumnTable, CoreError> {
    ColumnTable::new(
        "coaches",
        "created_at",
        vec![
            ColumnSpec::new("name", ColumnType::Text),
            ColumnSpec::new("email", ColumnType::Text),
            ColumnSpec::new("status", ColumnType::Option).grouped(),
            ColumnSpec::new("specialization", ColumnType::Option).stored_as("specialization_id"),
            ColumnSpec::new("max_clients", ColumnType::NUMBER),
            ColumnSpec::new("created_at", ColumnType::Date),
        ],
    )
}
