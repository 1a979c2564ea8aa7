//! Driving port for student login.
//!
//! Inbound adapters call it to authenticate credentials without knowing the
//! backing store or hashing primitive.

use async_trait::async_trait;

use crate::domain::{AdmissionNumber, Error, LoginCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated admission number.
    ///
    /// Unknown students and wrong passwords fail with the same
    /// [`crate::domain::ErrorCode::Unauthorized`] error.
    async fn authenticate(&self, credentials: &LoginCredentials)
    -> Result<AdmissionNumber, Error>;
}
