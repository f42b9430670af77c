//! Profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Valid blood type values (inclusive).
pub const BLOOD_TYPE_RANGE: std::ops::RangeInclusive<i16> = 1..=4;

/// A user's nutrition profile.
///
/// One row per user, upserted by the profile update operation. The
/// `daily_calories` target is either supplied by the client or derived
/// from the body metrics (see [`super::calories`]).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// Unique profile identifier.
    pub id: Uuid,
    /// The owning user.
    pub user_id: Uuid,
    /// Height in centimeters.
    pub height: i32,
    /// Current weight in kilograms.
    pub current_weight: f64,
    /// Desired weight in kilograms.
    pub desired_weight: f64,
    /// Age in years.
    pub age: i32,
    /// Blood type, 1 through 4.
    pub blood_type: i16,
    /// Daily calorie target.
    pub daily_calories: i32,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
    /// When the profile was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data for creating or replacing a user's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertProfile {
    /// The owning user.
    pub user_id: Uuid,
    /// Height in centimeters.
    pub height: i32,
    /// Current weight in kilograms.
    pub current_weight: f64,
    /// Desired weight in kilograms.
    pub desired_weight: f64,
    /// Age in years.
    pub age: i32,
    /// Blood type, 1 through 4.
    pub blood_type: i16,
    /// Daily calorie target.
    pub daily_calories: i32,
}
