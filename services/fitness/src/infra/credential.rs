//! Argon2id password hashing with a random salt per hash. Hashes are PHC
//! strings, so parameters and salt travel with the hash.

use std::sync::OnceLock;

use anyhow::anyhow;
use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use crate::domain::repository::CredentialPort;
use crate::error::FitnessServiceError;

#[derive(Clone, Default)]
pub struct Argon2Credentials;

impl CredentialPort for Argon2Credentials {
    fn hash(&self, password: &str) -> Result<String, FitnessServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow!("hash password: {e}"))?;
        Ok(hash.to_string())
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, FitnessServiceError> {
        let parsed = PasswordHash::new(hash).map_err(|e| anyhow!("parse stored hash: {e}"))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(anyhow!("verify password: {e}").into()),
        }
    }

    fn verify_decoy(&self, password: &str) -> Result<(), FitnessServiceError> {
        self.verify(password, decoy_hash()?)?;
        Ok(())
    }
}

/// Hash with the same parameters as real ones, computed once per process.
fn decoy_hash() -> Result<&'static str, FitnessServiceError> {
    static DECOY: OnceLock<String> = OnceLock::new();
    if let Some(hash) = DECOY.get() {
        return Ok(hash);
    }
    let hash = Argon2Credentials.hash("decoy password for unknown logins")?;
    Ok(DECOY.get_or_init(|| hash))
}
