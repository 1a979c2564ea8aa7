//! Student account data model.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Maximum length of an admission number, matching the stored column width.
pub const ADMISSION_NUMBER_MAX: usize = 20;

/// Validation errors returned by [`AdmissionNumber::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionNumberError {
    InvalidFormat,
    TooLong { max: usize },
}

impl fmt::Display for AdmissionNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "Invalid admission number format"),
            Self::TooLong { max } => {
                write!(f, "admission number must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for AdmissionNumberError {}

static ADMISSION_NUMBER_RE: OnceLock<Regex> = OnceLock::new();

fn admission_number_regex() -> &'static Regex {
    ADMISSION_NUMBER_RE.get_or_init(|| {
        Regex::new("^[0-9-]+$")
            .unwrap_or_else(|error| panic!("admission number regex failed to compile: {error}"))
    })
}

/// Student identifier made of digits and hyphens.
///
/// # Examples
/// ```
/// use bus_booking::domain::AdmissionNumber;
///
/// assert!(AdmissionNumber::new("12-345").is_ok());
/// assert!(AdmissionNumber::new("12A345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdmissionNumber(String);

impl AdmissionNumber {
    /// Validate and construct an admission number.
    pub fn new(raw: impl Into<String>) -> Result<Self, AdmissionNumberError> {
        let raw = raw.into();
        if !admission_number_regex().is_match(&raw) {
            return Err(AdmissionNumberError::InvalidFormat);
        }
        if raw.chars().count() > ADMISSION_NUMBER_MAX {
            return Err(AdmissionNumberError::TooLong {
                max: ADMISSION_NUMBER_MAX,
            });
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for AdmissionNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for AdmissionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<AdmissionNumber> for String {
    fn from(value: AdmissionNumber) -> Self {
        value.0
    }
}

/// Opaque PHC-format password hash produced by a credential hasher.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash string.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded hash string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Registered student.
///
/// ## Invariants
/// - `admission_number` is unique across students.
/// - `password_hash` is never a plaintext password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub admission_number: AdmissionNumber,
    pub password_hash: PasswordHash,
    /// Free-text recovery word captured at signup. Never echoed back.
    pub recovery_word: String,
}
