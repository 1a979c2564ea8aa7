//! Port abstraction for student credential persistence.

use async_trait::async_trait;

use crate::domain::{AdmissionNumber, Student};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by student repository adapters.
    pub enum StudentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "student repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "student repository query failed: {message}",
        /// A student with this admission number already exists.
        Duplicate { admission_number: String } =>
            "admission number {admission_number} is already registered",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a new student; never overwrites an existing one.
    async fn create(&self, student: &Student) -> Result<(), StudentRepositoryError>;

    /// Fetch a student by admission number.
    async fn find_by_admission_number(
        &self,
        admission_number: &AdmissionNumber,
    ) -> Result<Option<Student>, StudentRepositoryError>;
}
