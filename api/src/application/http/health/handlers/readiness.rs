use axum::extract::State;
use coachdesk_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Readiness",
    description = "Pings the database and reports its round-trip latency.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 503, body = ApiErrorResponse),
    ),
)]
pub async fn readiness(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state
        .service
        .health
        .readiness()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
