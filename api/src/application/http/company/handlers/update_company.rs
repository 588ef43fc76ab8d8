use axum::{
    Extension,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use strategy_forge_core::domain::{
    authentication::value_objects::Session,
    company::{entities::CompanyItem, ports::CompanyService},
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::{
    company::validators::UpdateCompanyValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateCompanyResponse {
    pub data: CompanyItem,
}

#[utoipa::path(
    put,
    path = "/{company_id}",
    tag = "company",
    summary = "Update company",
    description = "Updates the provided fields of a company in the caller's tenant.",
    params(
        ("company_id" = Uuid, Path, description = "Company ID"),
    ),
    responses(
        (status = 200, body = UpdateCompanyResponse),
        (status = 404, description = "Company not found"),
    ),
    request_body = UpdateCompanyValidator
)]
pub async fn update_company(
    Path(company_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    ValidateJson(payload): ValidateJson<UpdateCompanyValidator>,
) -> Result<Response<UpdateCompanyResponse>, ApiError> {
    let company = state
        .service
        .update_company(session, company_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateCompanyResponse { data: company }))
}
