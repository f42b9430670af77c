//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use slimmom_auth::SessionManager;
use slimmom_core::config::AppConfig;
use slimmom_database::repositories::UserRepository;
use slimmom_service::{AccountService, CatalogService, DiaryService, ProfileService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Session lifecycle manager (login, logout, refresh, bearer checks).
    pub session_manager: Arc<SessionManager>,
    /// User repository, used by the auth extractor to resolve the caller.
    pub user_repo: Arc<UserRepository>,
    /// Registration and email verification.
    pub account_service: Arc<AccountService>,
    /// Nutrition profile management.
    pub profile_service: Arc<ProfileService>,
    /// Food catalog queries.
    pub catalog_service: Arc<CatalogService>,
    /// Food diary management.
    pub diary_service: Arc<DiaryService>,
}
