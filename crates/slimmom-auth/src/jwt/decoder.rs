//! JWT token validation.
//!
//! The decoder checks signature, expiry, and token type. It says nothing
//! about liveness: a token that passes here may still belong to a deleted
//! session, so callers must also consult the session store.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

use slimmom_core::config::auth::AuthConfig;
use slimmom_core::error::AppError;

use super::claims::{Claims, TokenType};

/// Validates JWT token strings.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Failures map to `Authentication`: a bad bearer token rejects the
    /// request outright.
    pub fn decode_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self
            .decode_token(token)
            .map_err(AppError::authentication)?;

        if claims.token_type != TokenType::Access {
            return Err(AppError::authentication(
                "Invalid token type: expected access token",
            ));
        }

        Ok(claims)
    }

    /// Decodes and validates a refresh token string.
    ///
    /// Failures map to `Authorization`: the caller presented a refresh
    /// token that is no longer (or never was) honored.
    pub fn decode_refresh_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token).map_err(AppError::authorization)?;

        if claims.token_type != TokenType::Refresh {
            return Err(AppError::authorization(
                "Invalid token type: expected refresh token",
            ));
        }

        Ok(claims)
    }

    /// Internal decode without type checking.
    fn decode_token(&self, token: &str) -> Result<Claims, String> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    "Token has expired".to_string()
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    "Invalid token format".to_string()
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    "Invalid token signature".to_string()
                }
                _ => format!("Token validation failed: {e}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use slimmom_core::error::ErrorKind;
    use uuid::Uuid;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_access_token_roundtrip() {
        let encoder = JwtEncoder::new(&config());
        let decoder = JwtDecoder::new(&config());
        let user_id = Uuid::new_v4();

        let pair = encoder.generate_token_pair(user_id).expect("pair");
        let claims = decoder
            .decode_access_token(&pair.access_token)
            .expect("decode");
        assert_eq!(claims.user_id(), user_id);
        assert_eq!(claims.token_type, TokenType::Access);
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let encoder = JwtEncoder::new(&config());
        let decoder = JwtDecoder::new(&config());

        let pair = encoder.generate_token_pair(Uuid::new_v4()).expect("pair");
        let err = decoder
            .decode_access_token(&pair.refresh_token)
            .expect_err("type confusion must fail");
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[test]
    fn test_access_token_rejected_as_refresh() {
        let encoder = JwtEncoder::new(&config());
        let decoder = JwtDecoder::new(&config());

        let pair = encoder.generate_token_pair(Uuid::new_v4()).expect("pair");
        let err = decoder
            .decode_refresh_token(&pair.access_token)
            .expect_err("type confusion must fail");
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = JwtEncoder::new(&config());
        let other = AuthConfig {
            jwt_secret: "other-secret".to_string(),
            ..AuthConfig::default()
        };
        let decoder = JwtDecoder::new(&other);

        let pair = encoder.generate_token_pair(Uuid::new_v4()).expect("pair");
        assert!(decoder.decode_access_token(&pair.access_token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let decoder = JwtDecoder::new(&config());
        assert!(decoder.decode_access_token("not-a-jwt").is_err());
    }
}
