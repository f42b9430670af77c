//! Embedded database migrations.

use sqlx::PgPool;
use tracing::info;

use slimmom_core::error::{AppError, ErrorKind};

/// Applies all pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Migration failed", e))?;

    info!("Database migrations complete");
    Ok(())
}
