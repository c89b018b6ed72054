//! Password digest.
//!
//! Credentials are stored as the lowercase hex SHA-256 of the raw password
//! bytes. There is no salt: databases written by earlier versions store the
//! same unsalted digest, and changing it would lock every existing user out.

use sha2::{Digest, Sha256};

/// Length of a hex-encoded digest.
pub const DIGEST_HEX_LEN: usize = 64;

/// Compute the stored credential digest for `password`.
pub fn password_digest(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check `password` against a stored digest.
pub fn digest_matches(password: &str, stored: &str) -> bool {
    password_digest(password) == stored
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_known_vector() {
        assert_eq!(
            password_digest("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn test_digest_fixed_length() {
        assert_eq!(password_digest("a").len(), DIGEST_HEX_LEN);
        assert_eq!(password_digest(&"x".repeat(10_000)).len(), DIGEST_HEX_LEN);
    }

    #[test]
    fn test_digest_differs_from_plaintext() {
        for password in ["a", "hunter2", "5e884898"] {
            assert_ne!(password_digest(password), password);
        }
    }

    #[test]
    fn test_digest_matches() {
        let stored = password_digest("s3cret");
        assert!(digest_matches("s3cret", &stored));
        assert!(!digest_matches("S3cret", &stored));
    }
}
