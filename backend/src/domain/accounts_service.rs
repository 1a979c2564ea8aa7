//! Student signup and login service.
//!
//! Password hashing runs on the blocking pool. Trace-aware domain errors are
//! built after the blocking task returns so they keep the request trace id.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::domain::ports::{
    CredentialHasher, CredentialHasherError, LoginService, SignupService, StudentRepository,
    StudentRepositoryError,
};
use crate::domain::{
    AdmissionNumber, Error, LoginCredentials, PasswordHash, SignupDetails, Student,
};

/// Message returned for every failed login.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid admission number or password";

/// Service implementing the signup and login driving ports.
#[derive(Clone)]
pub struct StudentAccountService<S> {
    students: Arc<S>,
    hasher: Arc<dyn CredentialHasher>,
}

impl<S> StudentAccountService<S> {
    /// Create a new service with the given repository and hasher.
    pub fn new(students: Arc<S>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { students, hasher }
    }

    async fn hash_password(&self, password: &str) -> Result<PasswordHash, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.hash(password.as_str()))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(map_hasher_error)
    }

    async fn verify_password(
        &self,
        password: &str,
        hash: PasswordHash,
    ) -> Result<Result<bool, CredentialHasherError>, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.verify(password.as_str(), &hash))
            .await
            .map_err(|err| Error::internal(format!("password verification task failed: {err}")))
    }
}

fn invalid_credentials() -> Error {
    Error::unauthorized(INVALID_CREDENTIALS_MESSAGE)
}

fn map_hasher_error(error: CredentialHasherError) -> Error {
    Error::internal(format!("credential hasher failed: {error}"))
}

fn map_student_error(error: StudentRepositoryError) -> Error {
    match error {
        StudentRepositoryError::Duplicate { admission_number } => {
            Error::conflict("Admission number already registered").with_details(json!({
                "field": "admissionNumber",
                "code": "duplicate_admission_number",
                "value": admission_number,
            }))
        }
        StudentRepositoryError::Connection { message } => {
            Error::internal(format!("student repository unavailable: {message}"))
        }
        StudentRepositoryError::Query { message } => {
            Error::internal(format!("student repository error: {message}"))
        }
    }
}

#[async_trait]
impl<S> SignupService for StudentAccountService<S>
where
    S: StudentRepository,
{
    async fn register(&self, details: &SignupDetails) -> Result<AdmissionNumber, Error> {
        let password_hash = self.hash_password(details.password()).await?;
        let student = Student {
            admission_number: details.admission_number().clone(),
            password_hash,
            recovery_word: details.recovery_word().to_owned(),
        };
        self.students
            .create(&student)
            .await
            .map_err(map_student_error)?;
        info!(admission_number = %student.admission_number, "student registered");
        Ok(student.admission_number)
    }
}

#[async_trait]
impl<S> LoginService for StudentAccountService<S>
where
    S: StudentRepository,
{
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<AdmissionNumber, Error> {
        let Ok(admission_number) = AdmissionNumber::new(credentials.admission_number()) else {
            debug!("login rejected: malformed admission number");
            return Err(invalid_credentials());
        };

        let Some(student) = self
            .students
            .find_by_admission_number(&admission_number)
            .await
            .map_err(map_student_error)?
        else {
            debug!(%admission_number, "login rejected: unknown admission number");
            return Err(invalid_credentials());
        };

        match self
            .verify_password(credentials.password(), student.password_hash)
            .await?
        {
            Ok(true) => {
                info!(%admission_number, "student logged in");
                Ok(admission_number)
            }
            Ok(false) => {
                debug!(%admission_number, "login rejected: password mismatch");
                Err(invalid_credentials())
            }
            Err(CredentialHasherError::MalformedHash { message }) => {
                warn!(%admission_number, %message, "stored password hash is unreadable");
                Err(invalid_credentials())
            }
            Err(error) => Err(map_hasher_error(error)),
        }
    }
}

#[cfg(test)]
#[path = "accounts_service_tests.rs"]
mod tests;
