//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`LoginService`, `SeatBookingCommand`, ...) are called by
//! inbound adapters; driven ports (`BusRepository`, `CredentialHasher`, ...)
//! are implemented by outbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod bus_repository;
mod bus_schedule;
mod credential_hasher;
mod login_service;
mod page_renderer;
mod payment_gateway;
mod route_timetable_query;
mod seat_booking_command;
mod signup_service;
mod student_repository;

#[cfg(test)]
pub use bus_repository::MockBusRepository;
pub use bus_repository::{BusRepository, BusRepositoryError};
#[cfg(test)]
pub use bus_schedule::{MockBusScheduleCommand, MockBusScheduleQuery};
pub use bus_schedule::{BusScheduleCommand, BusScheduleQuery};
#[cfg(test)]
pub use credential_hasher::MockCredentialHasher;
pub use credential_hasher::{CredentialHasher, CredentialHasherError};
pub use login_service::LoginService;
#[cfg(test)]
pub use login_service::MockLoginService;
#[cfg(test)]
pub use page_renderer::MockPageRenderer;
pub use page_renderer::{Page, PageRenderError, PageRenderer};
pub use payment_gateway::{
    AcknowledgingPaymentGateway, PAYMENT_COMPLETED_MESSAGE, PaymentGateway, PaymentReceipt,
};
#[cfg(test)]
pub use route_timetable_query::MockRouteTimetableQuery;
pub use route_timetable_query::RouteTimetableQuery;
#[cfg(test)]
pub use seat_booking_command::MockSeatBookingCommand;
pub use seat_booking_command::SeatBookingCommand;
#[cfg(test)]
pub use signup_service::MockSignupService;
pub use signup_service::SignupService;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{StudentRepository, StudentRepositoryError};
