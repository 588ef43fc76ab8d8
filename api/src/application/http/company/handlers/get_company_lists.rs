use axum::{
    Extension,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use strategy_forge_core::domain::{
    authentication::value_objects::Session,
    company::{entities::CompanyList, ports::CompanyService},
};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCompanyListsResponse {
    pub data: Vec<CompanyList>,
}

#[utoipa::path(
    get,
    path = "/{company_id}/lists",
    tag = "company",
    summary = "Get company lists",
    description = "Lists the tenant's lists that contain the company.",
    params(
        ("company_id" = Uuid, Path, description = "Company ID"),
    ),
    responses(
        (status = 200, body = GetCompanyListsResponse),
    ),
)]
pub async fn get_company_lists(
    Path(company_id): Path<Uuid>,
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Response<GetCompanyListsResponse>, ApiError> {
    let lists = state
        .service
        .get_company_lists(session, company_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCompanyListsResponse { data: lists }))
}
