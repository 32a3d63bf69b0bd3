use axum::extract::State;
use coachdesk_core::domain::payment::entities::Payment;

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
    path = "/payments/query",
    tag = "query",
    summary = "Query payments",
    description = "Filtered, sorted page of payments. Amount filters are given in currency units and compared against stored cents.",
    request_body = FacetedQueryValidator,
    responses(
        (status = 200, body = FacetedQueryResponse<Payment>),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn query_payments(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FacetedQueryValidator>,
) -> Result<Response<FacetedQueryResponse<Payment>>, ApiError> {
    run_faceted_query(state.service.payments.as_ref(), payload).await
}
