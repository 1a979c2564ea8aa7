//! Domain primitives, services and ports.
//!
//! Purpose: define strongly typed bus, student and booking values plus the
//! services that enforce their rules. Keep types immutable where possible
//! and document invariants and serialisation contracts in each type's
//! Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) and ErrorCode: transport-agnostic error.
//! - Bus, NewBus, Weekday, BusId: the admin schedule.
//! - AdmissionNumber, Student, LoginCredentials, SignupDetails: accounts.
//! - SeatRequest, SeatReservation, Booking: seat booking.
//! - BookingService, BusScheduleService, StudentAccountService: driving
//!   port implementations.

pub mod accounts_service;
pub mod auth;
pub mod booking;
pub mod booking_service;
pub mod bus;
pub mod error;
pub mod ports;
pub mod schedule_service;
pub mod student;
pub mod trace_id;

pub use self::accounts_service::{INVALID_CREDENTIALS_MESSAGE, StudentAccountService};
pub use self::auth::{CredentialsValidationError, LoginCredentials, SignupDetails};
pub use self::booking::{Booking, SeatClaim, SeatRequest, SeatReservation};
pub use self::booking_service::{BookingService, SEATS_UNAVAILABLE_MESSAGE};
pub use self::bus::{
    Bus, BusId, BusValidationError, NewBus, Weekday, parse_seat_count, validate_bus_form,
};
pub use self::error::{Error, ErrorCode};
pub use self::schedule_service::BusScheduleService;
pub use self::student::{
    ADMISSION_NUMBER_MAX, AdmissionNumber, AdmissionNumberError, PasswordHash, Student,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
