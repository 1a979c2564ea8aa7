//! Shared Diesel error mapping for the repositories.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map pool errors into a repository-specific connection error constructor.
pub(crate) fn map_pool_error<E>(error: PoolError, connection: impl FnOnce(String) -> E) -> E {
    connection(error.into_message())
}

/// Whether the failure is a unique-constraint violation.
pub(crate) fn is_unique_violation(error: &DieselError) -> bool {
    matches!(
        error,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

/// Map common Diesel error variants into query/connection constructors.
///
/// Database detail is logged at debug level and kept out of the returned
/// message.
pub(crate) fn map_diesel_error<E>(
    error: &DieselError,
    operation: &'static str,
    query: impl FnOnce(String) -> E,
    connection: impl FnOnce(String) -> E,
) -> E {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), operation, "diesel operation failed");
        }
        other => debug!(error = %other, operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            connection(format!("{operation}: database connection error"))
        }
        DieselError::NotFound => query(format!("{operation}: record not found")),
        DieselError::QueryBuilderError(_) => query(format!("{operation}: database query error")),
        _ => query(format!("{operation}: database error")),
    }
}
