use axum::{extract::Request, http::HeaderMap, middleware::Next, response::Response};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use strategy_forge_core::domain::authentication::value_objects::Session;

/// Reads the bearer token, if any; an empty or non-bearer header yields no token.
pub fn session_from_headers(headers: &HeaderMap) -> Session {
    headers
        .typed_get::<Authorization<Bearer>>()
        .map(|Authorization(bearer)| bearer.token().trim().to_string())
        .filter(|token| !token.is_empty())
        .map(Session::bearer)
        .unwrap_or_default()
}

/// Attaches a [`Session`] to every request.
///
/// Validation happens in the service on each call, so an anonymous session is
/// still forwarded and rejected there.
pub async fn auth(mut req: Request, next: Next) -> Response {
    let session = session_from_headers(req.headers());
    req.extensions_mut().insert(session);

    next.run(req).await
}

#[cfg(test)]
mod tests {
    use axum::http::{HeaderValue, header::AUTHORIZATION};

    use super::*;

    #[test]
    fn test_bearer_token_is_extracted() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));

        assert_eq!(session_from_headers(&headers), Session::bearer("abc.def.ghi"));
    }

    #[test]
    fn test_missing_or_foreign_scheme_is_anonymous() {
        assert_eq!(session_from_headers(&HeaderMap::new()), Session::anonymous());

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));
        assert_eq!(session_from_headers(&headers), Session::anonymous());

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(session_from_headers(&headers), Session::anonymous());
    }
}
