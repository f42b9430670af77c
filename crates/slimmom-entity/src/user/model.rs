//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered user.
///
/// Users are created by registration in the `PendingVerification` state
/// (`verified = false`, `verification_token` set) and move to `Verified`
/// when the token is consumed. The password hash is never serialized.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique, stored case-sensitively).
    pub email: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the email address has been verified.
    pub verified: bool,
    /// Single-use email verification token; nulled once consumed.
    pub verification_token: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether the account still awaits email verification.
    pub fn is_pending_verification(&self) -> bool {
        !self.verified
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Freshly minted verification token.
    pub verification_token: String,
}
