//! Password hashing collaborators
//!
//! The service never stores or compares a plaintext password; it hands the
//! plaintext to a [`PasswordHasher`] and persists the digest.

use argon2::Argon2;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};
use thiserror::Error;

/// Error produced while hashing or verifying a password
#[derive(Error, Debug)]
#[error("Password hashing error: {0}")]
pub struct HashError(pub String);

/// One-way password transform contract consumed by
/// [`UserService`](crate::service::UserService)
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a one-way digest
    fn encode(&self, plaintext: &str) -> Result<String, HashError>;

    /// Check a plaintext password against a stored digest
    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, HashError>;
}

/// Password hasher backed by Argon2id with per-password random salts
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a new Argon2 hasher with the default parameters
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn encode(&self, plaintext: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut rand::thread_rng());
        let argon2 = Argon2::default();
        let digest = argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| HashError(format!("Failed to hash password: {}", e)))?
            .to_string();

        Ok(digest)
    }

    fn verify(&self, plaintext: &str, digest: &str) -> Result<bool, HashError> {
        let parsed_hash = PasswordHash::new(digest)
            .map_err(|e| HashError(format!("Failed to parse password hash: {}", e)))?;

        let argon2 = Argon2::default();
        let result = argon2.verify_password(plaintext.as_bytes(), &parsed_hash);

        Ok(result.is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_produces_phc_digest() {
        let hasher = Argon2Hasher::new();

        let digest = hasher.encode("CorrectHorse1!").unwrap();
        assert_ne!(digest, "CorrectHorse1!");
        assert!(digest.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_accepts_matching_password() {
        let hasher = Argon2Hasher::new();

        let digest = hasher.encode("CorrectHorse1!").unwrap();
        assert!(hasher.verify("CorrectHorse1!", &digest).unwrap());
    }

    #[test]
    fn test_verify_rejects_wrong_password() {
        let hasher = Argon2Hasher::new();

        let digest = hasher.encode("CorrectHorse1!").unwrap();
        assert!(!hasher.verify("WrongHorse2!", &digest).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_digest() {
        let hasher = Argon2Hasher::new();

        let result = hasher.verify("CorrectHorse1!", "not-a-phc-string");
        assert!(result.is_err());
    }
}
