//! `AuthUser` extractor: pulls the bearer token from the Authorization
//! header, validates it against the session store, and resolves the caller.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use slimmom_core::error::AppError;
use slimmom_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller, available to any handler that asks for it.
///
/// Every failure mode is a 401: missing or malformed header, bad signature,
/// expired token, no live session for the fingerprint, or a user row that
/// no longer exists.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    /// Returns the authenticated user.
    pub fn user(&self) -> &User {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let user_id = state.session_manager.authenticate(token).await?;

        let user = state
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::authentication("User no longer exists"))?;

        Ok(AuthUser(user))
    }
}
