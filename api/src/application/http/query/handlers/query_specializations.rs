use axum::extract::State;
use coachdesk_core::domain::specialization::entities::Specialization;

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
    path = "/specializations/query",
    tag = "query",
    summary = "Query specializations",
    description = "Filtered, sorted page of coach specializations.",
    request_body = FacetedQueryValidator,
    responses(
        (status = 200, body = FacetedQueryResponse<Specialization>),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn query_specializations(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FacetedQueryValidator>,
) -> Result<Response<FacetedQueryResponse<Specialization>>, ApiError> {
    run_faceted_query(state.service.specializations.as_ref(), payload).await
}
