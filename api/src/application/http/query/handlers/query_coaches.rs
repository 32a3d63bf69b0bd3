use axum::extract::State;
use coachdesk_core::domain::coach::entities::Coach;

use super::faceted_query::{FacetedQueryResponse, run_faceted_query};
use crate::application::http::{
    query::validators::FacetedQueryValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/coaches/query",
    tag = "query",
    summary = "Query coaches",
    description = "Filtered, sorted page of coaches with facet counts per requested column.",
    request_body = FacetedQueryValidator,
    responses(
        (status = 200, body = FacetedQueryResponse<Coach>),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn query_coaches(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FacetedQueryValidator>,
) -> Result<Response<FacetedQueryResponse<Coach>>, ApiError> {
    run_faceted_query(state.service.coaches.as_ref(), payload).await
}
