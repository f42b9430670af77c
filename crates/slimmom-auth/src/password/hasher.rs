//! Argon2id password hashing.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordVerifier, SaltString},
    Argon2, PasswordHasher as _,
};

use slimmom_core::error::AppError;

/// Hashes and verifies passwords with Argon2id and per-password salts.
#[derive(Clone, Default)]
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher").finish()
    }
}

impl PasswordHasher {
    /// Creates a hasher with the default Argon2id parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hashes a plaintext password. Every call salts freshly, so two
    /// hashes of the same password differ.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Checks a plaintext password against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; only a malformed hash or an internal
    /// Argon2 failure is an error.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid password hash format: {e}")))?;

        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("secret123").expect("hash");
        assert!(hasher.verify_password("secret123", &hash).expect("verify"));
        assert!(!hasher.verify_password("wrong", &hash).expect("verify"));
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = PasswordHasher::new();
        let a = hasher.hash_password("secret123").expect("hash");
        let b = hasher.hash_password("secret123").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let hasher = PasswordHasher::new();
        assert!(hasher.verify_password("secret123", "not-a-hash").is_err());
    }
}
