use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use user_auth_api::{
    auth::{CredentialStore, InMemoryUserRepository, PgUserRepository, TokenService},
    config::Config,
    create_router, db, AppState,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("User Auth API - Starting...");

    let config = Config::from_env().expect("Invalid configuration");

    let store: Arc<dyn CredentialStore> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to database...");
            let pool = db::create_pool(database_url)
                .await
                .expect("Failed to create database pool");
            db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            Arc::new(PgUserRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; users are kept in memory and lost on exit");
            Arc::new(InMemoryUserRepository::new())
        }
    };

    let token_service = TokenService::with_ttl(&config.jwt_secret, config.token_ttl_seconds);
    let app = create_router(AppState::new(store, token_service));

    let addr = config.bind_address();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("User Auth API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app).await.expect("Server error");
}
