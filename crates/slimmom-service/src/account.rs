//! Account lifecycle: registration, email verification, resend.

use tracing::info;
use uuid::Uuid;

use slimmom_auth::PasswordHasher;
use slimmom_core::error::AppError;
use slimmom_core::result::AppResult;
use slimmom_database::repositories::UserRepository;
use slimmom_entity::user::{CreateUser, User};
use slimmom_mailer::Mailer;

/// Handles registration and the email verification flow.
#[derive(Debug, Clone)]
pub struct AccountService {
    users: UserRepository,
    hasher: PasswordHasher,
    mailer: Mailer,
    password_min_length: usize,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(users: UserRepository, mailer: Mailer, password_min_length: usize) -> Self {
        Self {
            users,
            hasher: PasswordHasher::new(),
            mailer,
            password_min_length,
        }
    }

    /// Registers a new, unverified user and sends the verification email.
    ///
    /// The email is sent before returning; a delivery failure surfaces as
    /// an error even though the user row has already been created. The
    /// caller can retry delivery through [`Self::resend_verification`].
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AppResult<User> {
        check_password_length(password, self.password_min_length)?;

        if self.users.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Email already registered"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let verification_token = Uuid::new_v4().to_string();

        let user = self
            .users
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
                verification_token: verification_token.clone(),
            })
            .await?;

        self.mailer
            .send_verification(&user.email, &user.name, &verification_token)
            .await?;

        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Consumes a verification token and marks the account verified.
    ///
    /// The token is single-use: once consumed it no longer resolves to a
    /// user, so a second attempt reports not-found.
    pub async fn verify_email(&self, token: &str) -> AppResult<()> {
        let user = self
            .users
            .find_by_verification_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        self.users.mark_verified(user.id).await?;
        info!(user_id = %user.id, "email verified");
        Ok(())
    }

    /// Re-sends the verification email for a pending registration.
    ///
    /// The outstanding token is reused, so links from earlier emails stay
    /// valid. Verified accounts are rejected with a conflict.
    pub async fn resend_verification(&self, email: &str) -> AppResult<()> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        if !user.is_pending_verification() {
            return Err(AppError::conflict(
                "Verification has already been passed",
            ));
        }

        let token = user.verification_token.as_deref().ok_or_else(|| {
            AppError::internal("Unverified user has no verification token")
        })?;

        self.mailer
            .send_verification(&user.email, &user.name, token)
            .await?;

        info!(user_id = %user.id, "verification email re-sent");
        Ok(())
    }
}

/// Enforces the configured minimum password length, counted in characters.
fn check_password_length(password: &str, min_length: usize) -> AppResult<()> {
    if password.chars().count() < min_length {
        return Err(AppError::validation(format!(
            "Password must be at least {min_length} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length_follows_configured_minimum() {
        assert!(check_password_length("secret", 6).is_ok());
        assert!(check_password_length("12345", 6).is_err());
        // A stricter configuration rejects passwords the default accepts.
        assert!(check_password_length("secret", 10).is_err());
        assert!(check_password_length("long enough pass", 10).is_ok());
    }

    #[test]
    fn test_password_length_counts_characters_not_bytes() {
        assert!(check_password_length("пароль", 6).is_ok());
    }
}
