use axum::{
    Extension,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use strategy_forge_core::domain::{
    authentication::value_objects::Session, company::ports::CompanyService,
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteCompanyResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{company_id}",
    tag = "company",
    summary = "Delete company",
    description = "Permanently deletes a company from the caller's tenant.",
    params(
        ("company_id" = Uuid, Path, description = "Company ID"),
    ),
    responses(
        (status = 200, body = DeleteCompanyResponse),
        (status = 404, description = "Company not found"),
    ),
)]
pub async fn delete_company(
    Path(company_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response<DeleteCompanyResponse>, ApiError> {
    state
        .service
        .delete_company(session, company_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteCompanyResponse {
        message: "Company deleted successfully".to_string(),
    }))
}
