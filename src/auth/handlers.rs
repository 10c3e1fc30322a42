// HTTP handlers for authentication endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::debug;
use validator::Validate;

use crate::auth::{
    error::AuthError,
    models::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse},
};
use crate::AppState;

/// Register a new user
/// POST /auth/register
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "User registered", body = MessageResponse, example = json!({"message": "Registration successful!"})),
        (status = 400, description = "Invalid input data", body = MessageResponse),
        (status = 409, description = "Email already registered", body = MessageResponse, example = json!({"message": "Email already exists!"})),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AuthError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected registration body: {}", rejection.body_text());
        AuthError::ValidationError("Invalid request body".to_string())
    })?;
    request.validate()?;

    state
        .auth_service
        .register(
            &request.email,
            &request.password,
            &request.first_name,
            &request.last_name,
        )
        .await?;

    Ok(Json(MessageResponse::new("Registration successful!")))
}

/// Login a user
/// POST /auth/login
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = TokenResponse),
        (status = 401, description = "Unknown email or wrong password", body = MessageResponse, example = json!({"message": "Invalid email or password"})),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, AuthError> {
    // Malformed credentials get the same answer as wrong ones
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected login body: {}", rejection.body_text());
        AuthError::InvalidCredentials
    })?;
    request
        .validate()
        .map_err(|_| AuthError::InvalidCredentials)?;

    let token = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(TokenResponse { token }))
}
