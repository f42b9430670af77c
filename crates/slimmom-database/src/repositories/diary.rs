//! Diary record repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use slimmom_core::error::{AppError, ErrorKind};
use slimmom_core::result::AppResult;
use slimmom_entity::diary::{CreateDiaryRecord, DiaryRecord};

/// Repository for per-user food diary records.
#[derive(Debug, Clone)]
pub struct DiaryRepository {
    pool: PgPool,
}

impl DiaryRepository {
    /// Create a new diary repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new diary record.
    pub async fn create(&self, data: &CreateDiaryRecord) -> AppResult<DiaryRecord> {
        sqlx::query_as::<_, DiaryRecord>(
            "INSERT INTO diary_records \
             (user_id, date, title, grams, calories, calorie_intake, category) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.date)
        .bind(&data.title)
        .bind(data.grams)
        .bind(data.calories)
        .bind(data.calorie_intake)
        .bind(&data.category)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create diary record", e))
    }

    /// List a user's records whose timestamp falls in `[start, end)`.
    pub async fn find_by_user_in_range(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<DiaryRecord>> {
        sqlx::query_as::<_, DiaryRecord>(
            "SELECT * FROM diary_records \
             WHERE user_id = $1 AND date >= $2 AND date < $3 \
             ORDER BY date ASC",
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list diary records", e))
    }

    /// Delete a record only if it belongs to the given user.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete_owned(&self, record_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM diary_records WHERE id = $1 AND user_id = $2")
            .bind(record_id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete diary record", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
