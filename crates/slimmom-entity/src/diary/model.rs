//! Diary record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single food diary entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DiaryRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// When the food was consumed.
    pub date: DateTime<Utc>,
    /// Name of the consumed product.
    pub title: String,
    /// Consumed amount in grams.
    pub grams: f64,
    /// Calories for the consumed amount.
    pub calories: i32,
    /// Share of the daily calorie target this record represents.
    pub calorie_intake: f64,
    /// Category of the consumed product.
    pub category: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a diary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDiaryRecord {
    /// The owning user.
    pub user_id: Uuid,
    /// When the food was consumed.
    pub date: DateTime<Utc>,
    /// Name of the consumed product.
    pub title: String,
    /// Consumed amount in grams.
    pub grams: f64,
    /// Calories for the consumed amount.
    pub calories: i32,
    /// Share of the daily calorie target this record represents.
    pub calorie_intake: f64,
    /// Category of the consumed product.
    pub category: String,
}
