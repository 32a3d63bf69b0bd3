use std::collections::HashSet;

use crate::domain::{common::entities::app_errors::CoreError, filter::value_objects::FilterType};

/// Storage type of a filterable column.
///
/// `Number::scale` converts the unit the UI speaks into the unit stored in the
/// database. Plain numbers use 1; money stored in integer cents uses 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Option,
    MultiOption,
    Date,
    Number { scale: u32 },
}

impl ColumnType {
    pub const NUMBER: ColumnType = ColumnType::Number { scale: 1 };
    pub const MONEY: ColumnType = ColumnType::Number { scale: 100 };

    pub fn kind(&self) -> FilterType {
        match self {
            ColumnType::Text => FilterType::Text,
            ColumnType::Option => FilterType::Option,
            ColumnType::MultiOption => FilterType::MultiOption,
            ColumnType::Date => FilterType::Date,
            ColumnType::Number { .. } => FilterType::Number,
        }
    }
}

impl From<FilterType> for ColumnType {
    fn from(filter_type: FilterType) -> Self {
        match filter_type {
            FilterType::Text => ColumnType::Text,
            FilterType::Option => ColumnType::Option,
            FilterType::MultiOption => ColumnType::MultiOption,
            FilterType::Date => ColumnType::Date,
            FilterType::Number => ColumnType::NUMBER,
        }
    }
}

/// How facet counts for a column are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetStrategy {
    /// Fetch the projected values and count them in process.
    InMemory,
    /// Ask the database for `GROUP BY` counts. For low-cardinality columns.
    Grouped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub id: &'static str,
    pub storage: &'static str,
    pub column_type: ColumnType,
    pub facet: FacetStrategy,
}

impl ColumnSpec {
    pub const fn new(id: &'static str, column_type: ColumnType) -> Self {
        Self {
            id,
            storage: id,
            column_type,
            facet: FacetStrategy::InMemory,
        }
    }

    pub const fn stored_as(self, storage: &'static str) -> Self {
        Self { storage, ..self }
    }

    pub const fn grouped(self) -> Self {
        Self {
            facet: FacetStrategy::Grouped,
            ..self
        }
    }
}

/// Static column declaration of one entity.
///
/// Built once at startup; construction fails on inconsistent declarations so
/// request handling never has to re-check them.
#[derive(Debug, Clone)]
pub struct ColumnTable {
    entity: &'static str,
    default_sort: &'static str,
    columns: Vec<ColumnSpec>,
}

impl ColumnTable {
    pub fn new(
        entity: &'static str,
        default_sort: &'static str,
        columns: Vec<ColumnSpec>,
    ) -> Result<Self, CoreError> {
        let invalid = |reason: String| CoreError::InvalidColumnSpec { entity, reason };

        if default_sort.is_empty() {
            return Err(invalid("default sort column is empty".to_string()));
        }

        let mut seen = HashSet::new();
        for spec in &columns {
            if spec.id.is_empty() || spec.storage.is_empty() {
                return Err(invalid("column id and storage name must be set".to_string()));
            }
            if !seen.insert(spec.id) {
                return Err(invalid(format!("column '{}' declared twice", spec.id)));
            }
            if let ColumnType::Number { scale: 0 } = spec.column_type {
                return Err(invalid(format!("column '{}' has a zero scale", spec.id)));
            }
        }

        Ok(Self {
            entity,
            default_sort,
            columns,
        })
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    /// Storage column used when a request carries no sort descriptor.
    pub fn default_sort(&self) -> &'static str {
        self.default_sort
    }

    pub fn spec(&self, column_id: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|spec| spec.id == column_id)
    }

    /// Logical id -> storage column. Unknown ids resolve to themselves.
    pub fn resolve<'a>(&self, column_id: &'a str) -> &'a str {
        self.spec(column_id)
            .map(|spec| spec.storage)
            .unwrap_or(column_id)
    }

    pub fn facet_strategy(&self, column_id: &str) -> FacetStrategy {
        self.spec(column_id)
            .map(|spec| spec.facet)
            .unwrap_or(FacetStrategy::InMemory)
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ColumnTable {
        ColumnTable::new(
            "payments",
            "created_at",
            vec![
                ColumnSpec::new("client", ColumnType::Option).stored_as("client_id"),
                ColumnSpec::new("status", ColumnType::Option).grouped(),
                ColumnSpec::new("amount", ColumnType::MONEY),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_alias() {
        assert_eq!(table().resolve("client"), "client_id");
    }

    #[test]
    fn test_resolve_identity_for_plain_and_unknown_columns() {
        let table = table();
        assert_eq!(table.resolve("status"), "status");
        assert_eq!(table.resolve("paid_at"), "paid_at");
    }

    #[test]
    fn test_facet_strategy() {
        let table = table();
        assert_eq!(table.facet_strategy("status"), FacetStrategy::Grouped);
        assert_eq!(table.facet_strategy("client"), FacetStrategy::InMemory);
        assert_eq!(table.facet_strategy("unknown"), FacetStrategy::InMemory);
    }

    #[test]
    fn test_rejects_duplicate_columns() {
        let result = ColumnTable::new(
            "clients",
            "created_at",
            vec![
                ColumnSpec::new("status", ColumnType::Option),
                ColumnSpec::new("status", ColumnType::Text),
            ],
        );
        assert!(matches!(
            result,
            Err(CoreError::InvalidColumnSpec { entity: "clients", .. })
        ));
    }

    #[test]
    fn test_rejects_zero_scale() {
        let result = ColumnTable::new(
            "payments",
            "created_at",
            vec![ColumnSpec::new("amount", ColumnType::Number { scale: 0 })],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_column_type_kind() {
        assert_eq!(ColumnType::MONEY.kind(), FilterType::Number);
        assert_eq!(ColumnType::from(FilterType::Number), ColumnType::NUMBER);
    }
}
