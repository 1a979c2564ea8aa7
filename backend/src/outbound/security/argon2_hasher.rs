//! Argon2id implementation of the `CredentialHasher` port.
//!
//! Hashes are stored in PHC string form, so the algorithm parameters and
//! salt travel with each hash and verification needs no extra state.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    self, PasswordHash as PhcHash, PasswordHasher, PasswordVerifier, SaltString,
};

use crate::domain::PasswordHash;
use crate::domain::ports::{CredentialHasher, CredentialHasherError};

/// Argon2id hasher using the library's default cost parameters.
#[derive(Debug, Clone, Default)]
pub struct Argon2CredentialHasher {
    argon2: Argon2<'static>,
}

impl Argon2CredentialHasher {
    /// Create a hasher with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHasherError> {
        let salt = SaltString::generate(&mut OsRng);
        let encoded = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|err| CredentialHasherError::hash(err.to_string()))?;
        Ok(PasswordHash::new(encoded.to_string()))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, CredentialHasherError> {
        let parsed = PhcHash::new(hash.as_str())
            .map_err(|err| CredentialHasherError::malformed_hash(err.to_string()))?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(CredentialHasherError::malformed_hash(err.to_string())),
        }
    }
}
