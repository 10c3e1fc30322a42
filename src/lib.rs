pub mod auth;
pub mod config;
pub mod db;
pub mod users;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::{
    AuthService, CredentialStore, LoginRequest, MessageResponse, PasswordService, RegisterRequest,
    TokenResponse, TokenService, UserProfile,
};
use users::ProfileService;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::register_handler,
        auth::handlers::login_handler,
        users::handlers::me_handler,
    ),
    components(
        schemas(RegisterRequest, LoginRequest, TokenResponse, MessageResponse, UserProfile)
    ),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "Current user profile")
    ),
    info(
        title = "User Auth API",
        version = "0.1.0",
        description = "Password registration, JWT login and profile lookup"
    )
)]
pub struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub profile_service: Arc<ProfileService>,
}

impl AppState {
    /// Wire the flows over one store and one token service
    pub fn new(store: Arc<dyn CredentialStore>, token_service: TokenService) -> Self {
        let token_service = Arc::new(token_service);

        Self {
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&store),
                PasswordService::new(),
                Arc::clone(&token_service),
            )),
            profile_service: Arc::new(ProfileService::new(store, token_service)),
        }
    }
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS and tracing layers
pub fn create_router(state: AppState) -> Router {
    // The browser client is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/auth/register", post(auth::register_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/api/users/me", get(users::me_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
