// Bearer scheme parsing for the Authorization header

use axum::http::{header, HeaderMap};

use crate::auth::error::AuthError;

pub const BEARER_PREFIX: &str = "Bearer ";

/// The raw Authorization header value, if present and valid UTF-8
pub fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

/// Strip the bearer scheme prefix, leaving the token.
///
/// Missing headers and other schemes are `MissingToken`; whether the token
/// itself is any good is for the token service to decide.
pub fn bearer_token(raw: Option<&str>) -> Result<&str, AuthError> {
    raw.ok_or(AuthError::MissingToken)?
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MissingToken)
}
