use axum::extract::State;
use coachdesk_core::domain::client::entities::Client;

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
    path = "/clients/query",
    tag = "query",
    summary = "Query clients",
    description = "Filtered, sorted page of clients with facet counts per requested column.",
    request_body = FacetedQueryValidator,
    responses(
        (status = 200, body = FacetedQueryResponse<Client>),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn query_clients(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FacetedQueryValidator>,
) -> Result<Response<FacetedQueryResponse<Client>>, ApiError> {
    run_faceted_query(state.service.clients.as_ref(), payload).await
}
