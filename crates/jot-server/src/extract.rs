//! Caller extraction from the Authorization header.
//!
//! Protected handlers take a [`CurrentUser`] argument; extraction runs
//! token verification against the credential store on every request, so a
//! token whose user has disappeared stops working immediately.

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

use jot_core::types::UserId;

use crate::error::ApiError;
use crate::state::AppState;

/// The verified caller of a protected endpoint.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// User ID from the token subject, confirmed to exist.
    pub id: UserId,
    /// Email of the caller, for logging.
    pub email: String,
}

/// Pull the token out of `Authorization: Bearer <token>`.
///
/// Returns `None` for a missing header, a non-Bearer scheme, or a value
/// that is not valid ASCII. All of those collapse into the same
/// authentication failure at the call site.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // A missing or malformed header is reported exactly like a bad
        // token; callers cannot probe which part failed.
        let token = bearer_token(&parts.headers).ok_or(jot_core::Error::Authentication)?;

        let user = state.auth().verify(token).await?;

        Ok(CurrentUser {
            id: user.id,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with_auth("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_token_trims_whitespace() {
        let headers = headers_with_auth("Bearer   abc.def.ghi  ");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header_is_none() {
        let headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_non_bearer_scheme_is_none() {
        let headers = headers_with_auth("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&headers), None);
    }
}
