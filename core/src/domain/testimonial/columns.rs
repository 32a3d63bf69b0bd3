use crate::domain::{
    common::entities::app_errors::CoreError,
    filter::columns::{ColumnSpec, ColumnTable, ColumnType},
};

pub fn column_table() -> Result<ColumnTable, CoreError> {
    ColumnTable::new(
        "testimonials",
        "created_at",
        vec![
            ColumnSpec::new("client", ColumnType::Option).stored_as("client_id"),
            ColumnSpec::new("coach", ColumnType::Option).stored_as("coach_id"),
            ColumnSpec::new("content", ColumnType::Text),
            ColumnSpec::new("rating", ColumnType::NUMBER),
            ColumnSpec::new("status", ColumnType::Option).grouped(),
            ColumnSpec::new("category", ColumnType::MultiOption),
            ColumnSpec::new("created_at", ColumnType::Date),
        ],
    )
}
