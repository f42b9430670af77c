//! Request DTOs with validation rules.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// POST /api/auth/register
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name, 3 to 30 characters.
    #[validate(length(min = 3, max = 30, message = "Name must be 3 to 30 characters"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Password. The configured minimum length is enforced by the
    /// account service, which knows the runtime configuration.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /api/auth/login
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// POST /api/auth/verify (resend verification email)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResendVerificationRequest {
    /// Email address of the pending registration.
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
}

/// POST /api/auth/refresh
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    /// The refresh token issued at login.
    #[serde(default)]
    pub refresh_token: String,
}

/// PUT /api/profile/update
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    /// Height in centimeters.
    #[validate(range(min = 1, message = "Height must be positive"))]
    pub height: i32,
    /// Current weight in kilograms.
    pub current_weight: f64,
    /// Desired weight in kilograms.
    pub desired_weight: f64,
    /// Age in years.
    #[validate(range(min = 1, message = "Age must be positive"))]
    pub age: i32,
    /// Blood type, 1 through 4.
    #[validate(range(min = 1, max = 4, message = "Blood type must be between 1 and 4"))]
    pub blood_type: i16,
    /// Daily calorie target; derived from the metrics when absent.
    #[serde(default)]
    pub daily_calories: Option<i32>,
}

/// POST /api/diary
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DiaryRequest {
    /// When the food was consumed.
    pub date: DateTime<Utc>,
    /// Name of the consumed product.
    #[validate(length(min = 1, message = "Product title is required"))]
    pub title: String,
    /// Consumed amount in grams.
    pub grams: f64,
    /// Calories for the consumed amount.
    pub calories: i32,
    /// Share of the daily calorie target this record represents.
    pub calorie_intake: f64,
    /// Category of the consumed product.
    #[validate(length(min = 1, message = "Product category is required"))]
    pub category: String,
}

/// GET /api/diary?date=YYYY-MM-DD
#[derive(Debug, Clone, Deserialize)]
pub struct DiaryDateQuery {
    /// Calendar day to list, `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// GET /api/products/search query parameters.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchQuery {
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Exact portion weight match.
    pub weight: Option<i32>,
    /// Minimum calories (inclusive).
    pub min_calories: Option<i32>,
    /// Maximum calories (inclusive).
    pub max_calories: Option<i32>,
    /// Exclude products flagged for this blood type.
    pub blood_type: Option<i16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_register_request_bounds() {
        let ok = RegisterRequest {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(ok.validate().is_ok());

        let short_name = RegisterRequest {
            name: "Al".to_string(),
            ..ok.clone()
        };
        assert!(short_name.validate().is_err());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let empty_password = RegisterRequest {
            password: String::new(),
            ..ok
        };
        assert!(empty_password.validate().is_err());
    }

    #[test]
    fn test_profile_request_blood_type_bounds() {
        let base = ProfileRequest {
            height: 170,
            current_weight: 80.0,
            desired_weight: 70.0,
            age: 30,
            blood_type: 2,
            daily_calories: None,
        };
        assert!(base.validate().is_ok());

        for blood_type in [0, 5] {
            let bad = ProfileRequest {
                blood_type,
                ..base.clone()
            };
            assert!(bad.validate().is_err());
        }
    }

    #[test]
    fn test_diary_request_carries_intake_and_category() {
        let req: DiaryRequest = serde_json::from_str(
            r#"{
                "date": "2024-03-15T12:30:00Z",
                "title": "Oatmeal",
                "grams": 150.0,
                "calories": 165,
                "calorieIntake": 8.25,
                "category": "cereals"
            }"#,
        )
        .expect("parse");
        assert_eq!(req.calorie_intake, 8.25);
        assert_eq!(req.category, "cereals");
        assert!(req.validate().is_ok());

        let no_category = DiaryRequest {
            category: String::new(),
            ..req
        };
        assert!(no_category.validate().is_err());
    }

    #[test]
    fn test_search_query_wire_names_are_camel_case() {
        let q: ProductSearchQuery =
            serde_json::from_str(r#"{"minCalories": 100, "bloodType": 3}"#).expect("parse");
        assert_eq!(q.min_calories, Some(100));
        assert_eq!(q.blood_type, Some(3));
    }
}
