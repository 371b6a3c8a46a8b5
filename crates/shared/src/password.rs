//! Password hashing utilities using Argon2id.
//!
//! The users table keeps the salt in its own column next to the hash, so the
//! salt is generated explicitly and passed into hashing rather than being
//! derived inside. The stored hash itself is a PHC-formatted string, which
//! keeps verification self-describing for future parameter upgrades.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use thiserror::Error;

/// Error type for password operations.
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("Failed to hash password: {0}")]
    HashError(String),

    #[error("Failed to verify password: {0}")]
    VerifyError(String),

    #[error("Invalid salt: {0}")]
    InvalidSalt(String),

    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

/// Argon2id parameters following OWASP recommendations (2024).
const MEMORY_COST: u32 = 19456; // 19 MiB in KiB
const TIME_COST: u32 = 2;
const PARALLELISM: u32 = 1;
const OUTPUT_LEN: usize = 32;

fn create_argon2() -> Result<Argon2<'static>, PasswordError> {
    let params = Params::new(MEMORY_COST, TIME_COST, PARALLELISM, Some(OUTPUT_LEN))
        .map_err(|e| PasswordError::HashError(format!("Failed to create Argon2 params: {}", e)))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Generates a random base64 salt suitable for [`hash_password`].
pub fn generate_salt() -> String {
    SaltString::generate(&mut OsRng).to_string()
}

/// Hashes a password with Argon2id using the given base64 salt.
///
/// Returns a PHC-formatted string that includes the algorithm, parameters,
/// salt, and hash.
pub fn hash_password(password: &str, salt: &str) -> Result<String, PasswordError> {
    let salt = SaltString::from_b64(salt).map_err(|e| PasswordError::InvalidSalt(e.to_string()))?;
    let argon2 = create_argon2()?;

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Verifies a password against a stored PHC-formatted hash.
///
/// The hash carries its own parameters and salt, so nothing else is needed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| PasswordError::InvalidHashFormat)?;
    let argon2 = Argon2::default();

    match argon2.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_salt_is_unique() {
        assert_ne!(generate_salt(), generate_salt());
    }

    #[test]
    fn test_hash_password_returns_phc_format() {
        let salt = generate_salt();
        let hash = hash_password("test_password", &salt).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("$v=19$"));
        assert!(hash.contains("m=19456"));
        assert!(hash.contains("t=2"));
        assert!(hash.contains("p=1"));
    }

    #[test]
    fn test_same_salt_same_hash() {
        let salt = generate_salt();
        let hash1 = hash_password("same_password", &salt).unwrap();
        let hash2 = hash_password("same_password", &salt).unwrap();
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_different_salt_different_hash() {
        let hash1 = hash_password("same_password", &generate_salt()).unwrap();
        let hash2 = hash_password("same_password", &generate_salt()).unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_password_correct() {
        let password = "my_secure_password123!";
        let hash = hash_password(password, &generate_salt()).unwrap();
        assert!(verify_password(password, &hash).unwrap());
    }

    #[test]
    fn test_verify_password_incorrect() {
        let hash = hash_password("correct_password", &generate_salt()).unwrap();
        assert!(!verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_verify_password_invalid_hash() {
        let result = verify_password("password", "invalid_hash_format");
        assert!(matches!(result, Err(PasswordError::InvalidHashFormat)));
    }

    #[test]
    fn test_hash_password_invalid_salt() {
        let result = hash_password("password", "not base64!!!");
        assert!(matches!(result, Err(PasswordError::InvalidSalt(_))));
    }

    #[test]
    fn test_hash_password_unicode() {
        let salt = generate_salt();
        let password = "senha123!пароль";
        let hash = hash_password(password, &salt).unwrap();
        assert!(verify_password(password, &hash).unwrap());
        assert!(!verify_password("different", &hash).unwrap());
    }
}
