//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings, so the salt and the fixed cost
//! parameters of `Argon2::default()` travel with the hash.

use argon2::{
    Argon2, PasswordHash, PasswordVerifier,
    password_hash::{Error as PHError, PasswordHasher, SaltString, rand_core::OsRng},
};

pub fn hash_password(password: &str) -> Result<String, PHError> {
    let salt = SaltString::generate(OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, PHError> {
    let parsed = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(PHError::Password) => Ok(false),
        Err(e) => Err(e),
    }
}
