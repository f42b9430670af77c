//! Response DTOs, serialized in camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use slimmom_entity::diary::DiaryRecord;
use slimmom_entity::product::Product;
use slimmom_entity::profile::Profile;
use slimmom_entity::user::User;

/// Plain acknowledgement body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

/// Public user representation (name and email only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// 201 body for POST /api/auth/register.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    /// The created user.
    pub user: UserResponse,
    /// Next-step hint for the client.
    pub message: String,
}

/// User representation returned at login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserResponse {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Whether the email address has been verified.
    pub verified: bool,
}

/// 200 body for POST /api/auth/login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// The authenticated user.
    pub user: LoginUserResponse,
}

/// 200 body for POST /api/auth/refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    /// Newly minted access token.
    pub access_token: String,
    /// The refresh token, unchanged.
    pub refresh_token: String,
}

/// Profile representation, optionally with the categories to avoid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    /// Profile identifier.
    pub id: Uuid,
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
    /// Product categories to avoid for this blood type; present only on
    /// fetch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_recommended: Option<Vec<String>>,
}

impl ProfileResponse {
    /// Builds the response from a stored profile.
    pub fn from_profile(profile: &Profile, not_recommended: Option<Vec<String>>) -> Self {
        Self {
            id: profile.id,
            height: profile.height,
            current_weight: profile.current_weight,
            desired_weight: profile.desired_weight,
            age: profile.age,
            blood_type: profile.blood_type,
            daily_calories: profile.daily_calories,
            not_recommended,
        }
    }
}

/// Product representation for catalog responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product identifier.
    pub id: Uuid,
    /// Product title.
    pub title: String,
    /// Category name.
    pub category: String,
    /// Reference portion weight in grams.
    pub weight: i32,
    /// Calories per reference portion.
    pub calories: i32,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            category: product.category.clone(),
            weight: product.weight,
            calories: product.calories,
        }
    }
}

/// Diary record representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryRecordResponse {
    /// Record identifier.
    pub id: Uuid,
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

impl From<&DiaryRecord> for DiaryRecordResponse {
    fn from(record: &DiaryRecord) -> Self {
        Self {
            id: record.id,
            date: record.date,
            title: record.title.clone(),
            grams: record.grams,
            calories: record.calories,
            calorie_intake: record.calorie_intake,
            category: record.category.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_uses_camel_case() {
        let body = LoginResponse {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            user: LoginUserResponse {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                verified: true,
            },
        };
        let json = serde_json::to_string(&body).expect("serialize");
        assert!(json.contains("\"accessToken\""));
        assert!(json.contains("\"refreshToken\""));
        assert!(json.contains("\"verified\""));
    }

    #[test]
    fn test_profile_response_omits_absent_not_recommended() {
        let body = ProfileResponse {
            id: Uuid::new_v4(),
            height: 170,
            current_weight: 80.0,
            desired_weight: 70.0,
            age: 30,
            blood_type: 2,
            daily_calories: 1652,
            not_recommended: None,
        };
        let json = serde_json::to_string(&body).expect("serialize");
        assert!(!json.contains("notRecommended"));
        assert!(json.contains("\"dailyCalories\":1652"));
    }
}
