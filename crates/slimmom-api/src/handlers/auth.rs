//! Auth handlers: register, login, current, logout, verify, resend, refresh.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::dto::request::{
    LoginRequest, RefreshRequest, RegisterRequest, ResendVerificationRequest,
};
use crate::dto::response::{
    LoginResponse, LoginUserResponse, MessageResponse, RefreshResponse, RegisterResponse,
    UserResponse,
};
use crate::dto::validate_request;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    validate_request(&req)?;

    let user = state
        .account_service
        .register(&req.name, &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            user: UserResponse::from(&user),
            message: "Verification email sent".to_string(),
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    validate_request(&req)?;

    let result = state.session_manager.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        access_token: result.tokens.access_token,
        refresh_token: result.tokens.refresh_token,
        user: LoginUserResponse {
            name: result.user.name,
            email: result.user.email,
            verified: result.user.verified,
        },
    }))
}

/// GET /api/auth/current
pub async fn current(auth: AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(auth.user()))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> Result<StatusCode, ApiError> {
    state.session_manager.logout(auth.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/verify/{token}
pub async fn verify_email(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.account_service.verify_email(&token).await?;
    Ok(Json(MessageResponse {
        message: "Verification successful".to_string(),
    }))
}

/// POST /api/auth/verify (resend)
pub async fn resend_verification(
    State(state): State<AppState>,
    Json(req): Json<ResendVerificationRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    validate_request(&req)?;
    state.account_service.resend_verification(&req.email).await?;
    Ok(Json(MessageResponse {
        message: "Verification email sent".to_string(),
    }))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let tokens = state.session_manager.refresh(&req.refresh_token).await?;
    Ok(Json(RefreshResponse {
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
    }))
}
