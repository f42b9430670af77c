//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An issued credential pair for a logged-in user.
///
/// Sessions are created at login and deleted at logout. Tokens are stored
/// as SHA-256 fingerprints, never as raw JWT strings. `expires_at` tracks
/// the access token's validity window and is replaced in place on refresh;
/// the refresh token fingerprint is never rotated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// SHA-256 fingerprint of the access token.
    pub access_token_hash: String,
    /// SHA-256 fingerprint of the refresh token.
    pub refresh_token_hash: String,
    /// When the current access token expires.
    pub expires_at: DateTime<Utc>,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Check whether the current access token window has elapsed.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Data required to create a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// SHA-256 fingerprint of the access token.
    pub access_token_hash: String,
    /// SHA-256 fingerprint of the refresh token.
    pub refresh_token_hash: String,
    /// When the access token expires.
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: DateTime<Utc>) -> Session {
        Session {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            access_token_hash: "a".repeat(64),
            refresh_token_hash: "r".repeat(64),
            expires_at,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_expired_tracks_expiry_window() {
        assert!(!session(Utc::now() + Duration::hours(1)).is_expired());
        assert!(session(Utc::now() - Duration::seconds(1)).is_expired());
    }
}
