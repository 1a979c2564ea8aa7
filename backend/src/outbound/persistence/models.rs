//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer; repositories convert them
//! to and from domain values.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::{AdmissionNumber, Bus, BusId, PasswordHash, Student, Weekday};

use super::schema::{bookings, buses, students};

/// Failures converting stored rows back into domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum RowConversionError {
    #[error("bus row {id} has invalid {field}: {value}")]
    Bus {
        id: i32,
        field: &'static str,
        value: String,
    },
    #[error("student row has invalid admission number: {value}")]
    Student { value: String },
}

/// Row struct for reading from the buses table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = buses)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BusRow {
    pub id: i32,
    pub description: String,
    pub seats: i32,
    pub seats_remaining: i32,
    pub day: String,
    pub time: String,
    pub route: String,
}

impl TryFrom<BusRow> for Bus {
    type Error = RowConversionError;

    fn try_from(row: BusRow) -> Result<Self, Self::Error> {
        let BusRow {
            id,
            description,
            seats,
            seats_remaining,
            day,
            time,
            route,
        } = row;
        let bus_id = BusId::new(id).map_err(|_| RowConversionError::Bus {
            id,
            field: "id",
            value: id.to_string(),
        })?;
        let day = day
            .parse::<Weekday>()
            .map_err(|_| RowConversionError::Bus {
                id,
                field: "day",
                value: day.clone(),
            })?;
        Ok(Self {
            id: bus_id,
            description,
            capacity: seats,
            seats_remaining,
            day,
            time,
            route,
        })
    }
}

/// Insertable struct for creating buses.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = buses)]
pub(crate) struct NewBusRow<'a> {
    pub description: &'a str,
    pub seats: i32,
    pub seats_remaining: i32,
    pub day: &'a str,
    pub time: &'a str,
    pub route: &'a str,
}

/// Row struct for reading from the students table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StudentRow {
    pub admission_number: String,
    pub password: String,
    pub favorite_word: String,
}

impl TryFrom<StudentRow> for Student {
    type Error = RowConversionError;

    fn try_from(row: StudentRow) -> Result<Self, Self::Error> {
        let admission_number = AdmissionNumber::new(row.admission_number.as_str()).map_err(
            |_| RowConversionError::Student {
                value: row.admission_number.clone(),
            },
        )?;
        Ok(Self {
            admission_number,
            password_hash: PasswordHash::new(row.password),
            recovery_word: row.favorite_word,
        })
    }
}

/// Insertable struct for creating students.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub(crate) struct NewStudentRow<'a> {
    pub admission_number: &'a str,
    pub password: &'a str,
    pub favorite_word: &'a str,
}

/// Insertable struct for the booking ledger.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = bookings)]
pub(crate) struct NewBookingRow<'a> {
    pub bus_id: i32,
    pub admission_number: Option<&'a str>,
    pub seat_number: i32,
    pub booked_at: DateTime<Utc>,
}
