//! Token fingerprinting.
//!
//! Sessions store a SHA-256 fingerprint of each JWT instead of the raw
//! token, so a leaked database dump does not hand out usable credentials.

use sha2::{Digest, Sha256};

/// Returns the lowercase hex SHA-256 fingerprint of a token string.
pub fn fingerprint(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex_encode(&hasher.finalize())
}

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push_str(&format!("{b:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable() {
        assert_eq!(fingerprint("abc"), fingerprint("abc"));
    }

    #[test]
    fn test_fingerprint_differs_per_token() {
        assert_ne!(fingerprint("abc"), fingerprint("abd"));
    }

    #[test]
    fn test_fingerprint_known_value() {
        assert_eq!(
            fingerprint("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
