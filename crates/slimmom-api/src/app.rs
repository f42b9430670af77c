//! Application builder: wires router + middleware + state into an Axum app.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use slimmom_auth::{SessionManager, SessionStore};
use slimmom_core::config::app::CorsConfig;
use slimmom_core::config::AppConfig;
use slimmom_core::error::AppError;
use slimmom_database::repositories::{
    DiaryRepository, ProductRepository, ProfileRepository, SessionRepository, UserRepository,
};
use slimmom_mailer::Mailer;
use slimmom_service::{AccountService, CatalogService, DiaryService, ProfileService};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(config.max_age_seconds));

    if config.allowed_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Runs the Slim Mom server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting Slim Mom server...");

    // Repositories
    let user_repo = UserRepository::new(db_pool.clone());
    let session_repo = SessionRepository::new(db_pool.clone());
    let profile_repo = ProfileRepository::new(db_pool.clone());
    let product_repo = ProductRepository::new(db_pool.clone());
    let diary_repo = DiaryRepository::new(db_pool.clone());

    // Mailer
    let mailer = Mailer::new(&config.mail, &config.server.app_url)?;

    // Auth
    let session_store = SessionStore::new(session_repo);
    let session_manager = Arc::new(SessionManager::new(
        &config.auth,
        session_store,
        user_repo.clone(),
    ));

    // Services
    let account_service = Arc::new(AccountService::new(
        user_repo.clone(),
        mailer,
        config.auth.password_min_length,
    ));
    let profile_service = Arc::new(ProfileService::new(profile_repo, product_repo.clone()));
    let catalog_service = Arc::new(CatalogService::new(product_repo));
    let diary_service = Arc::new(DiaryService::new(diary_repo));

    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool,
        session_manager,
        user_repo: Arc::new(user_repo),
        account_service,
        profile_service,
        catalog_service,
        diary_service,
    };

    let app = build_app(state, &config.server.cors);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Slim Mom server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
