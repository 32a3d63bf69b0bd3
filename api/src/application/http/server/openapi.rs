use crate::application::http::{health::router::HealthApiDoc, query::router::QueryApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CoachDesk API"
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document: the query endpoints carry their own absolute paths.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(QueryApiDoc::openapi());
    openapi
}
