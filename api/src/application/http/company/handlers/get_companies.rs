use axum::{Extension, extract::State};
use strategy_forge_core::domain::{
    authentication::value_objects::Session,
    company::{entities::CompanyItem, ports::CompanyService, value_objects::Paginated},
};

use crate::application::http::{
    query_extractor::CompanyQueryExtractor,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "",
    tag = "company",
    summary = "List companies",
    description = "Searches, filters, sorts and paginates the companies of the caller's tenant. Array filters accept repeated keys or `key[]`.",
    params(
        ("search" = Option<String>, Query, description = "Case-insensitive substring over name, legal name and domain"),
        ("country" = Option<Vec<String>>, Query, description = "One or more countries"),
        ("region" = Option<Vec<String>>, Query, description = "One or more regions"),
        ("category" = Option<Vec<String>>, Query, description = "Matches rows carrying any of the categories"),
        ("technology" = Option<Vec<String>>, Query, description = "Matches rows carrying any of the technologies"),
        ("min_employees" = Option<i64>, Query, description = "Inclusive lower employee bound"),
        ("max_employees" = Option<i64>, Query, description = "Inclusive upper employee bound"),
        ("company_size" = Option<String>, Query, description = "Size bucket such as `11-50 employees` or `10,001+`"),
        ("sortBy" = Option<String>, Query, description = "Sort column, default `created_at`"),
        ("sortOrder" = Option<String>, Query, description = "`asc` or `desc`, default `desc`"),
        ("page" = Option<u64>, Query, description = "1-based page, default 1"),
        ("limit" = Option<u64>, Query, description = "Page size, default 10"),
    ),
    responses(
        (status = 200, body = Paginated<CompanyItem>),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Tenant could not be resolved"),
    ),
)]
pub async fn get_companies(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    CompanyQueryExtractor(params): CompanyQueryExtractor,
) -> Result<Response<Paginated<CompanyItem>>, ApiError> {
    let companies = state
        .service
        .get_companies(session, params)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(companies))
}
