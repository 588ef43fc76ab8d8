use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Could not resolve tenant: {0}")]
    TenantResolution(String),

    #[error("Query failed: {0}")]
    QueryExecution(String),

    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Internal server error")]
    InternalServerError,
}
