// HTTP handlers for user endpoints

use axum::{extract::State, http::HeaderMap, Json};

use crate::auth::{
    bearer::authorization_header,
    error::AuthError,
    models::{MessageResponse, UserProfile},
};
use crate::AppState;

/// Get the profile of the user the bearer token belongs to
/// GET /api/users/me
#[utoipa::path(
    get,
    path = "/api/users/me",
    params(
        ("Authorization" = String, Header, description = "Bearer token issued by /auth/login")
    ),
    responses(
        (status = 200, description = "Current user", body = UserProfile),
        (status = 400, description = "Missing or non-bearer Authorization header", body = MessageResponse),
        (status = 401, description = "Invalid or expired token", body = MessageResponse),
        (status = 404, description = "Token subject has no account", body = MessageResponse)
    ),
    tag = "users"
)]
pub async fn me_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserProfile>, AuthError> {
    let profile = state
        .profile_service
        .get_profile(authorization_header(&headers))
        .await?;

    Ok(Json(profile))
}
