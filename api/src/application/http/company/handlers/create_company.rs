use axum::{Extension, extract::State};
use serde::{Deserialize, Serialize};
use strategy_forge_core::domain::{
    authentication::value_objects::Session,
    company::{entities::CompanyItem, ports::CompanyService},
};
use utoipa::ToSchema;

use crate::application::http::{
    company::validators::CreateCompanyValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateCompanyResponse {
    pub data: CompanyItem,
}

#[utoipa::path(
    post,
    path = "",
    tag = "company",
    summary = "Create company",
    description = "Creates a company in the caller's tenant.",
    responses(
        (status = 201, body = CreateCompanyResponse),
        (status = 400, description = "Invalid payload"),
    ),
    request_body = CreateCompanyValidator
)]
pub async fn create_company(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    ValidateJson(payload): ValidateJson<CreateCompanyValidator>,
) -> Result<Response<CreateCompanyResponse>, ApiError> {
    let company = state
        .service
        .create_company(session, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCompanyResponse { data: company }))
}
