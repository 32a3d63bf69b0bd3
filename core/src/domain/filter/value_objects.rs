use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Filter kind as sent by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum FilterType {
    Text,
    Option,
    MultiOption,
    Date,
    Number,
}

/// A primitive filter value. The UI sends strings, numbers and booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl FilterValue {
    /// String form used for text patterns, option membership and facet keys.
    pub fn to_text(&self) -> String {
        match self {
            FilterValue::Bool(value) => value.to_string(),
            FilterValue::Number(value) => format_number(*value),
            FilterValue::Text(value) => value.clone(),
        }
    }
}

/// Whole numbers print without a fractional part, like the UI does.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value as f64)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

/// One declarative filter condition. Conditions in a list are ANDed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterDescriptor {
    pub column_id: String,
    #[serde(rename = "type")]
    pub filter_type: FilterType,
    pub operator: String,
    #[serde(default)]
    pub values: Vec<FilterValue>,
}

impl FilterDescriptor {
    pub fn new(
        column_id: impl Into<String>,
        filter_type: FilterType,
        operator: impl Into<String>,
        values: Vec<FilterValue>,
    ) -> Self {
        Self {
            column_id: column_id.into(),
            filter_type,
            operator: operator.into(),
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SortDescriptor {
    pub column_id: String,
    #[serde(default, alias = "desc")]
    pub descending: bool,
}

impl SortDescriptor {
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            descending: false,
        }
    }

    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            descending: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page_index: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page_index: u64, page_size: u64) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// First row of the page, `page_index * page_size`.
    pub fn offset(&self) -> u64 {
        self.page_index.saturating_mul(self.page_size)
    }
}

/// Everything a list screen asks for in one round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetedQuery {
    #[serde(default)]
    pub filters: Vec<FilterDescriptor>,
    #[serde(default)]
    pub sorting: Vec<SortDescriptor>,
    pub page: PageRequest,
    #[serde(default)]
    pub facet_columns: Vec<String>,
}
