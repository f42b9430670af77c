//! Profile repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use slimmom_core::error::{AppError, ErrorKind};
use slimmom_core::result::AppResult;
use slimmom_entity::profile::{Profile, UpsertProfile};

/// Repository for nutrition profile operations. One profile per user.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the profile owned by a user.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }

    /// Create a new profile.
    pub async fn create(&self, data: &UpsertProfile) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles \
             (user_id, height, current_weight, desired_weight, age, blood_type, daily_calories) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.height)
        .bind(data.current_weight)
        .bind(data.desired_weight)
        .bind(data.age)
        .bind(data.blood_type)
        .bind(data.daily_calories)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create profile", e))
    }

    /// Replace the fields of a user's existing profile.
    pub async fn update_by_user(&self, data: &UpsertProfile) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "UPDATE profiles SET height = $2, current_weight = $3, desired_weight = $4, \
             age = $5, blood_type = $6, daily_calories = $7, updated_at = NOW() \
             WHERE user_id = $1 \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.height)
        .bind(data.current_weight)
        .bind(data.desired_weight)
        .bind(data.age)
        .bind(data.blood_type)
        .bind(data.daily_calories)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update profile", e))?
        .ok_or_else(|| {
            AppError::not_found(format!("Profile for user {} not found", data.user_id))
        })
    }
}
