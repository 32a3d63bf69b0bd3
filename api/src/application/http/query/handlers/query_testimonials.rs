use axum::extract::State;
use coachdesk_core::domain::testimonial::entities::Testimonial;

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
    path = "/testimonials/query",
    tag = "query",
    summary = "Query testimonials",
    description = "Filtered, sorted page of testimonials with facet counts per requested column.",
    request_body = FacetedQueryValidator,
    responses(
        (status = 200, body = FacetedQueryResponse<Testimonial>),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn query_testimonials(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<FacetedQueryValidator>,
) -> Result<Response<FacetedQueryResponse<Testimonial>>, ApiError> {
    run_faceted_query(state.service.testimonials.as_ref(), payload).await
}
