use axum::extract::State;
use coachdesk_core::domain::activity_period::entities::ActivityPeriod;

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
    path = "/activity-periods/query",
    tag = "query",
    summary = "Query activity periods",
    description = "Filtered, sorted page of client activity periods with facet counts per requested column.",
    request_body = FacetedQueryValidator,
    responses(
        (status = 200, body = FacetedQueryResponse<ActivityPeriod>),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn query_activity_periods(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FacetedQueryValidator>,
) -> Result<Response<FacetedQueryResponse<ActivityPeriod>>, ApiError> {
    run_faceted_query(state.service.activity_periods.as_ref(), payload).await
}
