use crate::domain::{
    common::entities::app_errors::CoreError,
    filter::columns::{ColumnSpec, ColumnTable, ColumnType},
};

pub fn column_table() -> Result<ColumnTable, CoreError> {
    ColumnTable::new(
        "activity_periods",
        "created_at",
        vec![
            ColumnSpec::new("client", ColumnType::Option).stored_as("client_id"),
            ColumnSpec::new("coach", ColumnType::Option).stored_as("coach_id"),
            ColumnSpec::new("kind", ColumnType::Option).grouped(),
            ColumnSpec::new("start_date", ColumnType::Date),
            ColumnSpec::new("end_date", ColumnType::Date),
            ColumnSpec::new("created_at", ColumnType::Date),
        ],
    )
}
