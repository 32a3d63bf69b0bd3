use crate::domain::{
    common::entities::app_errors::CoreError,
    filter::columns::{ColumnSpec, ColumnTable, ColumnType},
};

pub fn column_table() -> Result<ColumnTable, CoreError> {
    ColumnTable::new(
        "clients",
        "created_at",
        vec![
            ColumnSpec::new("name", ColumnType::Text),
            ColumnSpec::new("email", ColumnType::Text),
            ColumnSpec::new("status", ColumnType::Option).grouped(),
            ColumnSpec::new("coach", ColumnType::Option).stored_as("coach_id"),
            ColumnSpec::new("product", ColumnType::Option).stored_as("product_id"),
            ColumnSpec::new("start_date", ColumnType::Date),
            ColumnSpec::new("end_date", ColumnType::Date),
            ColumnSpec::new("created_at", ColumnType::Date),
        ],
    )
}
