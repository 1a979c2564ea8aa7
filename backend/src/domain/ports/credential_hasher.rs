//! Port for the password hashing primitive.
//!
//! Hashing is CPU-bound and synchronous; callers move it onto the blocking
//! pool.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Failures raised by credential hashers.
    pub enum CredentialHasherError {
        /// The primitive failed to produce a hash.
        Hash { message: String } => "password hashing failed: {message}",
        /// A stored hash could not be decoded.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait CredentialHasher: Send + Sync {
    /// Hash `password` with a fresh random salt.
    fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHasherError>;

    /// Check `password` against `hash`; `Ok(false)` on mismatch.
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, CredentialHasherError>;
}
