//! Profile handlers: upsert and fetch.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use slimmom_service::ProfileParams;

use crate::dto::request::ProfileRequest;
use crate::dto::response::ProfileResponse;
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/profile/update
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<ProfileRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), ApiError> {
    validate_request(&req)?;

    let (profile, created) = state
        .profile_service
        .upsert(
            auth.id,
            ProfileParams {
                height: req.height,
                current_weight: req.current_weight,
                desired_weight: req.desired_weight,
                age: req.age,
                blood_type: req.blood_type,
                daily_calories: req.daily_calories,
            },
        )
        .await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(ProfileResponse::from_profile(&profile, None))))
}

/// GET /api/profile/fetch
pub async fn fetch(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ProfileResponse>, ApiError> {
    let view = state.profile_service.fetch(auth.id).await?;
    Ok(Json(ProfileResponse::from_profile(
        &view.profile,
        Some(view.not_recommended),
    )))
}
