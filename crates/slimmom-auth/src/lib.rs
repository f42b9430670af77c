//! # slimmom-auth
//!
//! Authentication for the Slim Mom backend: signed token issuance and
//! validation, Argon2id password hashing, token fingerprinting, and the
//! session lifecycle (login, logout, refresh).
//!
//! Tokens stay cryptographically valid until expiry; revocation is the
//! session store's job. The API layer must cross-check every access token
//! against the store to honor logout.

pub mod jwt;
pub mod password;
pub mod session;
pub mod token;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair, TokenType};
pub use password::PasswordHasher;
pub use session::{LoginResult, SessionManager, SessionStore};
pub use token::fingerprint;
