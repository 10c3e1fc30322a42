// Password hashing and verification

use crate::auth::error::AuthError;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::error;

/// Well-formed Argon2id hash with default parameters that no password matches.
/// Verifying against it costs the same as a real verification.
const UNMATCHABLE_HASH: &str = concat!(
    "$argon2id$v=19$m=19456,t=2,p=1$",
    "c29tZXNhbHRzb21lc2FsdA$",
    "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
);

/// Password service for hashing and verification (Argon2id, PHC string format)
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    pub fn new() -> Self {
        Self
    }

    /// Hash a password with a fresh random salt
    pub fn hash_password(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                error!("Failed to hash password: {}", e);
                AuthError::PasswordHashError
            })
    }

    /// Verify a password against a stored hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            error!("Stored password hash is unreadable: {}", e);
            AuthError::PasswordHashError
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Spend a full verification's worth of work on a login with no account,
    /// so it takes as long as one with a wrong password
    pub fn verify_without_account(&self, password: &str) -> Result<(), AuthError> {
        self.verify_password(password, UNMATCHABLE_HASH).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_correct_password() {
        let service = PasswordService::new();
        let hash = service.hash_password("my-secure-password").unwrap();

        assert!(service.verify_password("my-secure-password", &hash).unwrap());
    }

    #[test]
    fn test_verify_wrong_password() {
        let service = PasswordService::new();
        let hash = service.hash_password("correct-password").unwrap();

        assert!(!service.verify_password("wrong-password", &hash).unwrap());
    }

    #[test]
    fn test_hash_never_contains_plaintext() {
        let service = PasswordService::new();
        let hash = service.hash_password("hunter2!").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("hunter2!"));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let service = PasswordService::new();
        let hash1 = service.hash_password("same-password").unwrap();
        let hash2 = service.hash_password("same-password").unwrap();

        assert_ne!(hash1, hash2);
        assert!(service.verify_password("same-password", &hash1).unwrap());
        assert!(service.verify_password("same-password", &hash2).unwrap());
    }

    #[test]
    fn test_unmatchable_hash_parses_and_never_matches() {
        let service = PasswordService::new();

        assert!(!service.verify_password("", UNMATCHABLE_HASH).unwrap());
        assert!(!service.verify_password("pw2", UNMATCHABLE_HASH).unwrap());
        assert!(service.verify_without_account("pw2").is_ok());
    }

    #[test]
    fn test_garbage_hash_is_an_error() {
        let service = PasswordService::new();
        let result = service.verify_password("pw", "not-a-phc-string");

        assert!(matches!(result, Err(AuthError::PasswordHashError)));
    }
}
