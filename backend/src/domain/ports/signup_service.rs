//! Driving port for student registration.

use async_trait::async_trait;

use crate::domain::{AdmissionNumber, Error, SignupDetails};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignupService: Send + Sync {
    /// Register a student, hashing the password before it is stored.
    async fn register(&self, details: &SignupDetails) -> Result<AdmissionNumber, Error>;
}
