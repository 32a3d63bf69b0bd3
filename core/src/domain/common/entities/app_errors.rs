use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Internal server error")]
    InternalServerError,

    #[error("Query exceeded its deadline")]
    Timeout,

    #[error("Invalid page request: {0}")]
    InvalidPageRequest(String),

    #[error("Invalid column table for {entity}: {reason}")]
    InvalidColumnSpec {
        entity: &'static str,
        reason: String,
    },

    #[error("Service unavailable")]
    ServiceUnavailable,
}
