//! PostgreSQL-backed `StudentRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{AdmissionNumber, Student};

use super::error_mapping::{is_unique_violation, map_diesel_error, map_pool_error};
use super::models::{NewStudentRow, StudentRow};
use super::pool::{DbPool, PoolError};
use super::schema::students;

/// Diesel-backed student credential store.
#[derive(Clone)]
pub struct DieselStudentRepository {
    pool: DbPool,
}

impl DieselStudentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> StudentRepositoryError {
    map_pool_error(error, StudentRepositoryError::connection)
}

fn map_insert_error(error: &DieselError, admission_number: &str) -> StudentRepositoryError {
    if is_unique_violation(error) {
        return StudentRepositoryError::duplicate(admission_number);
    }
    map_diesel(error, "create student")
}

fn map_diesel(error: &DieselError, operation: &'static str) -> StudentRepositoryError {
    map_diesel_error(
        error,
        operation,
        StudentRepositoryError::query,
        StudentRepositoryError::connection,
    )
}

#[async_trait]
impl StudentRepository for DieselStudentRepository {
    async fn create(&self, student: &Student) -> Result<(), StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let admission_number = student.admission_number.as_ref();
        let row = NewStudentRow {
            admission_number,
            password: student.password_hash.as_str(),
            favorite_word: student.recovery_word.as_str(),
        };
        diesel::insert_into(students::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(|err| map_insert_error(&err, admission_number))?;
        Ok(())
    }

    async fn find_by_admission_number(
        &self,
        admission_number: &AdmissionNumber,
    ) -> Result<Option<Student>, StudentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;
        let row: Option<StudentRow> = students::table
            .find(admission_number.as_ref())
            .select(StudentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel(&err, "find student"))?;
        row.map(|row| {
            Student::try_from(row).map_err(|err| StudentRepositoryError::query(err.to_string()))
        })
        .transpose()
    }
}
