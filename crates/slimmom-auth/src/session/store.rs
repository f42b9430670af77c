//! Persistent session storage over the session repository.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use slimmom_core::result::AppResult;
use slimmom_database::repositories::SessionRepository;
use slimmom_entity::session::{CreateSession, Session};

use crate::jwt::TokenPair;
use crate::token::fingerprint;

/// Stores and looks up sessions by token fingerprint.
///
/// Raw tokens never reach the database; every lookup key is a SHA-256
/// fingerprint computed here.
#[derive(Debug, Clone)]
pub struct SessionStore {
    repository: SessionRepository,
}

impl SessionStore {
    /// Creates a new session store.
    pub fn new(repository: SessionRepository) -> Self {
        Self { repository }
    }

    /// Persists a new session for a freshly issued token pair.
    pub async fn create_session(&self, user_id: Uuid, tokens: &TokenPair) -> AppResult<Session> {
        let data = CreateSession {
            user_id,
            access_token_hash: fingerprint(&tokens.access_token),
            refresh_token_hash: fingerprint(&tokens.refresh_token),
            expires_at: tokens.access_expires_at,
        };
        self.repository.create(&data).await
    }

    /// Finds the session holding this raw access token, scoped to a user.
    pub async fn find_by_access_token(
        &self,
        access_token: &str,
        user_id: Uuid,
    ) -> AppResult<Option<Session>> {
        self.repository
            .find_by_access_token_hash(&fingerprint(access_token), user_id)
            .await
    }

    /// Finds the session holding this raw refresh token.
    pub async fn find_by_refresh_token(&self, refresh_token: &str) -> AppResult<Option<Session>> {
        self.repository
            .find_by_refresh_token_hash(&fingerprint(refresh_token))
            .await
    }

    /// Swaps a session's access token in place after a refresh.
    pub async fn replace_access_token(
        &self,
        session_id: Uuid,
        access_token: &str,
        expires_at: DateTime<Utc>,
    ) -> AppResult<()> {
        self.repository
            .update_access_token(session_id, &fingerprint(access_token), expires_at)
            .await
    }

    /// Removes every session a user holds. Returns the number removed.
    pub async fn delete_for_user(&self, user_id: Uuid) -> AppResult<u64> {
        self.repository.delete_by_user(user_id).await
    }
}
