use std::collections::BTreeMap;

use coachdesk_core::domain::filter::{
    entities::FacetCount, logging::QueryLogger, ports::CollectionRepository,
    services::FacetedQueryService, value_objects::FacetedQuery,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    query::validators::FacetedQueryValidator,
    server::api_entities::{api_error::ApiError, response::Response},
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FacetedQueryResponse<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    /// Column id -> value -> number of rows, ignoring that column's own filter.
    pub faceted_data: BTreeMap<String, FacetCount>,
}

pub async fn run_faceted_query<R, L>(
    service: &FacetedQueryService<R, L>,
    payload: FacetedQueryValidator,
) -> Result<Response<FacetedQueryResponse<R::Row>>, ApiError>
where
    R: CollectionRepository,
    R::Row: Serialize,
    L: QueryLogger,
{
    let query = FacetedQuery::from(payload);
    let result = service
        .fetch_with_facets(&query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(FacetedQueryResponse {
        items: result.rows,
        total_count: result.total_count,
        faceted_data: result.facets,
    }))
}
