//! Process-local `StudentRepository` used when no database is configured.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{AdmissionNumber, Student};

/// In-memory student credential store keyed by admission number.
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    students: Mutex<HashMap<AdmissionNumber, Student>>,
}

impl InMemoryStudentRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<AdmissionNumber, Student>>, StudentRepositoryError> {
        self.students
            .lock()
            .map_err(|_| StudentRepositoryError::query("student store lock poisoned"))
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn create(&self, student: &Student) -> Result<(), StudentRepositoryError> {
        let mut students = self.lock()?;
        match students.entry(student.admission_number.clone()) {
            Entry::Occupied(_) => Err(StudentRepositoryError::duplicate(
                student.admission_number.as_ref(),
            )),
            Entry::Vacant(slot) => {
                slot.insert(student.clone());
                Ok(())
            }
        }
    }

    async fn find_by_admission_number(
        &self,
        admission_number: &AdmissionNumber,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        Ok(self.lock()?.get(admission_number).cloned())
    }
}
