use coachdesk_core::domain::filter::value_objects::{
    FacetedQuery, FilterDescriptor, PageRequest, SortDescriptor,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacetedQueryValidator {
    #[serde(default)]
    pub filters: Vec<FilterDescriptor>,

    /// Zero-based and unbounded; a page past the data has no items.
    #[serde(default)]
    pub page_index: u64,

    #[validate(range(min = 1, max = 100, message = "pageSize must be between 1 and 100"))]
    pub page_size: u64,

    #[serde(default)]
    pub sorting: Vec<SortDescriptor>,

    /// Columns to compute facet counts for.
    #[serde(default)]
    pub facet_columns: Vec<String>,
}

impl From<FacetedQueryValidator> for FacetedQuery {
    fn from(payload: FacetedQueryValidator) -> Self {
        FacetedQuery {
            filters: payload.filters,
            sorting: payload.sorting,
            page: PageRequest::new(payload.page_index, payload.page_size),
            facet_columns: payload.facet_columns,
        }
    }
}
