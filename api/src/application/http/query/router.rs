use super::handlers::query_activity_periods::{
    __path_query_activity_periods, query_activity_periods,
};
use super::handlers::query_clients::{__path_query_clients, query_clients};
use super::handlers::query_coaches::{__path_query_coaches, query_coaches};
use super::handlers::query_payments::{__path_query_payments, query_payments};
use super::handlers::query_specializations::{__path_query_specializations, query_specializations};
use super::handlers::query_testimonials::{__path_query_testimonials, query_testimonials};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::post};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    query_clients,
    query_coaches,
    query_payments,
    query_testimonials,
    query_activity_periods,
    query_specializations
))]
pub struct QueryApiDoc;

pub fn query_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{root_path}/clients/query"), post(query_clients))
        .route(&format!("{root_path}/coaches/query"), post(query_coaches))
        .route(&format!("{root_path}/payments/query"), post(query_payments))
        .route(
            &format!("{root_path}/testimonials/query"),
            post(query_testimonials),
        )
        .route(
            &format!("{root_path}/activity-periods/query"),
            post(query_activity_periods),
        )
        .route(
            &format!("{root_path}/specializations/query"),
            post(query_specializations),
        )
}
