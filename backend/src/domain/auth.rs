//! Authentication inputs: login credentials and signup details.
//!
//! Handlers build these from raw form values before talking to a port.
//! Signup details are validated here; login credentials pass through as typed.

use thiserror::Error;
use zeroize::Zeroizing;

use super::{AdmissionNumber, AdmissionNumberError};

/// Validation errors raised while building signup details from form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CredentialsValidationError {
    /// Admission number failed the format or length rule.
    #[error(transparent)]
    AdmissionNumber(#[from] AdmissionNumberError),
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

/// Login form input.
///
/// Both fields are kept as typed, blanks included: an unknown, malformed or
/// empty number fails authentication the same way a wrong password does.
///
/// # Examples
/// ```
/// use bus_booking::domain::LoginCredentials;
///
/// let creds = LoginCredentials::new("12-345", "hunter2");
/// assert_eq!(creds.admission_number(), "12-345");
/// assert_eq!(creds.password(), "hunter2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    admission_number: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Capture raw form values for authentication.
    pub fn new(admission_number: &str, password: &str) -> Self {
        Self {
            admission_number: admission_number.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        }
    }

    /// Admission number exactly as submitted.
    pub fn admission_number(&self) -> &str {
        self.admission_number.as_str()
    }

    /// Password exactly as submitted.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Signup form input with a validated admission number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetails {
    admission_number: AdmissionNumber,
    password: Zeroizing<String>,
    recovery_word: String,
}

impl SignupDetails {
    /// Validate raw signup form values.
    ///
    /// # Examples
    /// ```
    /// use bus_booking::domain::{AdmissionNumberError, CredentialsValidationError, SignupDetails};
    ///
    /// let err = SignupDetails::try_from_parts("12A345", "pw", "blue").unwrap_err();
    /// assert_eq!(
    ///     err,
    ///     CredentialsValidationError::AdmissionNumber(AdmissionNumberError::InvalidFormat)
    /// );
    /// ```
    pub fn try_from_parts(
        admission_number: &str,
        password: &str,
        recovery_word: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let admission_number = AdmissionNumber::new(admission_number)?;
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }
        Ok(Self {
            admission_number,
            password: Zeroizing::new(password.to_owned()),
            recovery_word: recovery_word.to_owned(),
        })
    }

    /// Validated admission number.
    pub fn admission_number(&self) -> &AdmissionNumber {
        &self.admission_number
    }

    /// Plaintext password to be hashed.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Recovery word stored alongside the account.
    pub fn recovery_word(&self) -> &str {
        self.recovery_word.as_str()
    }
}
