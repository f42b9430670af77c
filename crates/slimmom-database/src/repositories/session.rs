//! Session repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use slimmom_core::error::{AppError, ErrorKind};
use slimmom_core::result::AppResult;
use slimmom_entity::session::{CreateSession, Session};

/// Repository for session CRUD and query operations.
///
/// Tokens are looked up by their SHA-256 fingerprint; the raw JWT never
/// touches the database.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new session.
    pub async fn create(&self, data: &CreateSession) -> AppResult<Session> {
        sqlx::query_as::<_, Session>(
            "INSERT INTO sessions (user_id, access_token_hash, refresh_token_hash, expires_at) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(&data.access_token_hash)
        .bind(&data.refresh_token_hash)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))
    }

    /// Find a live session matching an access token fingerprint for a user.
    pub async fn find_by_access_token_hash(
        &self,
        hash: &str,
        user_id: Uuid,
    ) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>(
            "SELECT * FROM sessions WHERE access_token_hash = $1 AND user_id = $2",
        )
        .bind(hash)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find session by token", e)
        })
    }

    /// Find a session by refresh token fingerprint.
    pub async fn find_by_refresh_token_hash(&self, hash: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE refresh_token_hash = $1")
            .bind(hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    "Failed to find session by refresh token",
                    e,
                )
            })
    }

    /// Replace a session's access token fingerprint and expiry in place.
    ///
    /// Used by the refresh flow; the refresh token fingerprint is untouched.
    pub async fn update_access_token(
        &self,
        session_id: Uuid,
        access_token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE sessions SET access_token_hash = $2, expires_at = $3 WHERE id = $1",
        )
        .bind(session_id)
        .bind(access_token_hash)
        .bind(expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update session", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "Session {session_id} not found"
            )));
        }
        Ok(())
    }

    /// Delete all sessions belonging to a user. Returns the number removed.
    pub async fn delete_by_user(&self, user_id: Uuid) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete user sessions", e)
            })?;
        Ok(result.rows_affected())
    }
}
