//! Nutrition profile management.

use tracing::info;
use uuid::Uuid;

use slimmom_core::error::AppError;
use slimmom_core::result::AppResult;
use slimmom_database::repositories::{ProductRepository, ProfileRepository};
use slimmom_entity::profile::{daily_calorie_target, Profile, UpsertProfile, BLOOD_TYPE_RANGE};

/// A profile together with the catalog categories to avoid.
#[derive(Debug, Clone)]
pub struct ProfileView {
    /// The stored profile.
    pub profile: Profile,
    /// Product categories flagged for the profile's blood type.
    pub not_recommended: Vec<String>,
}

/// Parameters for creating or replacing a profile.
#[derive(Debug, Clone)]
pub struct ProfileParams {
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
    /// Daily calorie target; derived from the metrics when absent.
    pub daily_calories: Option<i32>,
}

/// Manages the one-per-user nutrition profile.
#[derive(Debug, Clone)]
pub struct ProfileService {
    profiles: ProfileRepository,
    products: ProductRepository,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(profiles: ProfileRepository, products: ProductRepository) -> Self {
        Self { profiles, products }
    }

    /// Creates or replaces the user's profile.
    ///
    /// Returns the stored profile and whether it was newly created, so the
    /// HTTP layer can answer 201 versus 200.
    pub async fn upsert(&self, user_id: Uuid, params: ProfileParams) -> AppResult<(Profile, bool)> {
        validate_metrics(&params)?;

        let daily_calories = params.daily_calories.unwrap_or_else(|| {
            daily_calorie_target(
                params.height,
                params.age,
                params.current_weight,
                params.desired_weight,
            )
        });

        let data = UpsertProfile {
            user_id,
            height: params.height,
            current_weight: params.current_weight,
            desired_weight: params.desired_weight,
            age: params.age,
            blood_type: params.blood_type,
            daily_calories,
        };

        let (profile, created) = match self.profiles.find_by_user(user_id).await? {
            Some(_) => (self.profiles.update_by_user(&data).await?, false),
            None => (self.profiles.create(&data).await?, true),
        };

        info!(user_id = %user_id, created, daily_calories, "profile saved");
        Ok((profile, created))
    }

    /// Fetches the user's profile with the not-recommended categories for
    /// their blood type.
    pub async fn fetch(&self, user_id: Uuid) -> AppResult<ProfileView> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile not found"))?;

        let not_recommended = self
            .products
            .find_excluded_categories(profile.blood_type)
            .await?;

        Ok(ProfileView {
            profile,
            not_recommended,
        })
    }
}

fn validate_metrics(params: &ProfileParams) -> AppResult<()> {
    if !BLOOD_TYPE_RANGE.contains(&params.blood_type) {
        return Err(AppError::validation("Blood type must be between 1 and 4"));
    }
    if params.height <= 0 {
        return Err(AppError::validation("Height must be positive"));
    }
    if params.age <= 0 {
        return Err(AppError::validation("Age must be positive"));
    }
    if params.current_weight <= 0.0 || params.desired_weight <= 0.0 {
        return Err(AppError::validation("Weight must be positive"));
    }
    if let Some(calories) = params.daily_calories {
        if calories <= 0 {
            return Err(AppError::validation("Daily calories must be positive"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slimmom_core::error::ErrorKind;

    fn params() -> ProfileParams {
        ProfileParams {
            height: 170,
            current_weight: 80.0,
            desired_weight: 70.0,
            age: 30,
            blood_type: 2,
            daily_calories: None,
        }
    }

    #[test]
    fn test_valid_metrics_pass() {
        assert!(validate_metrics(&params()).is_ok());
    }

    #[test]
    fn test_blood_type_out_of_range_rejected() {
        for blood_type in [0, 5, -1] {
            let p = ProfileParams {
                blood_type,
                ..params()
            };
            let err = validate_metrics(&p).expect_err("must reject");
            assert_eq!(err.kind, ErrorKind::Validation);
        }
    }

    #[test]
    fn test_nonpositive_metrics_rejected() {
        let p = ProfileParams {
            height: 0,
            ..params()
        };
        assert!(validate_metrics(&p).is_err());

        let p = ProfileParams {
            current_weight: -1.0,
            ..params()
        };
        assert!(validate_metrics(&p).is_err());

        let p = ProfileParams {
            daily_calories: Some(0),
            ..params()
        };
        assert!(validate_metrics(&p).is_err());
    }
}
