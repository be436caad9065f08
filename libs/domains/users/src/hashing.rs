use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("failed to hash password: {0}")]
    Hash(String),
}

/// One-way password hashing used before a user is stored
#[cfg_attr(test, mockall::automock)]
pub trait HashService: Send + Sync {
    fn hash(&self, plaintext: &str) -> Result<String, HashError>;

    /// `false` for a wrong password and for a malformed hash alike
    fn verify(&self, plaintext: &str, hash: &str) -> bool;
}

/// Argon2id with default parameters and a fresh random salt per hash.
/// Output is a PHC string, so parameters and salt travel with the hash.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2HashService;

impl Argon2HashService {
    pub fn new() -> Self {
        Self
    }
}

impl HashService for Argon2HashService {
    fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError::Hash(e.to_string()))
    }

    fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            tracing::warn!("Stored password hash is not a valid PHC string");
            return false;
        };

        Argon2::default()
            .verify_password(plaintext.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
