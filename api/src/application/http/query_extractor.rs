use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use strategy_forge_core::domain::company::value_objects::CompanyQueryParams;

use super::query_params::parse_company_query;

/// Extracts company list parameters, accepting repeated keys and `key[]`.
///
/// Never rejects: malformed input degrades to defaults in the normalizer.
#[derive(Debug, Clone)]
pub struct CompanyQueryExtractor(pub CompanyQueryParams);

impl<S> FromRequestParts<S> for CompanyQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");

        Ok(CompanyQueryExtractor(parse_company_query(query_string)))
    }
}
