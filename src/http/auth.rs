//! Session-token authentication for the HTTP API.
//!
//! Authenticated handlers take a [`Viewer`] argument; the extractor parses
//! the `Authorization: Bearer <token>` header and resolves the token
//! against the session store. Anything missing, malformed, or unknown is
//! a 401 before the handler body runs.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use super::error::AppError;
use super::state::AppState;
use crate::models::Viewer;

/// The raw bearer token of a request.
///
/// Used directly by logout, which needs the token itself rather than the
/// user it resolves to.
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::Unauthorized("Missing Authorization header".to_string()))?
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid Authorization header".to_string()))?;

        let token = value
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Expected a bearer token".to_string()))?
            .trim();
        if token.is_empty() {
            return Err(AppError::Unauthorized("Empty bearer token".to_string()));
        }

        Ok(BearerToken(token.to_string()))
    }
}

impl FromRequestParts<AppState> for Viewer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;
        state
            .sessions
            .get_session(&token)
            .ok_or_else(|| AppError::Unauthorized("Unknown or expired session token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header_value: Option<&str>) -> Result<BearerToken, AppError> {
        let mut builder = Request::builder().uri("/schedules");
        if let Some(value) = header_value {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        BearerToken::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_parses_bearer_token() {
        let BearerToken(token) = extract(Some("Bearer abc-123")).await.unwrap();
        assert_eq!(token, "abc-123");
    }

    #[tokio::test]
    async fn test_missing_header_is_unauthorized() {
        assert!(matches!(extract(None).await, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_unauthorized() {
        let result = extract(Some("Basic dXNlcjpwYXNz")).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn test_empty_token_is_unauthorized() {
        let result = extract(Some("Bearer   ")).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
