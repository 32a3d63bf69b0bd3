use crate::domain::{
    common::entities::app_errors::CoreError,
    filter::columns::{ColumnSpec, ColumnTable, ColumnType},
};

pub fn column_table() -> Result<ColumnTable, CoreError> {
    ColumnTable::new(
        "specializations",
        "created_at",
        vec![
            ColumnSpec::new("name", ColumnType::Text),
            ColumnSpec::new("description", ColumnType::Text),
            ColumnSpec::new("created_at", ColumnType::Date),
        ],
    )
}
