use axum::{
    Extension,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use strategy_forge_core::domain::{
    authentication::value_objects::Session,
    company::{entities::CompanyDetail, ports::CompanyService},
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCompanyResponse {
    pub data: CompanyDetail,
}

#[utoipa::path(
    get,
    path = "/{company_id}",
    tag = "company",
    summary = "Get company",
    description = "Returns one company with its list memberships, scoring overlay and metadata. Secondary data that fails to load is left empty.",
    params(
        ("company_id" = Uuid, Path, description = "Company ID"),
    ),
    responses(
        (status = 200, body = GetCompanyResponse),
        (status = 404, description = "Company not found"),
    ),
)]
pub async fn get_company(
    Path(company_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response<GetCompanyResponse>, ApiError> {
    let company = state
        .service
        .get_company_by_id(session, company_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCompanyResponse { data: company }))
}
