//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    BusRepository, BusScheduleCommand, BusScheduleQuery, CredentialHasher, LoginService,
    PageRenderer, PaymentGateway, RouteTimetableQuery, SeatBookingCommand, SignupService,
    StudentRepository,
};
use crate::domain::{BookingService, BusScheduleService, StudentAccountService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub signup: Arc<dyn SignupService>,
    pub seat_booking: Arc<dyn SeatBookingCommand>,
    pub timetable: Arc<dyn RouteTimetableQuery>,
    pub schedule: Arc<dyn BusScheduleCommand>,
    pub schedule_query: Arc<dyn BusScheduleQuery>,
    pub pages: Arc<dyn PageRenderer>,
    pub payments: Arc<dyn PaymentGateway>,
}

/// Driven adapters the domain services are built from.
pub struct HttpStateAdapters<B, S> {
    pub buses: Arc<B>,
    pub students: Arc<S>,
    pub hasher: Arc<dyn CredentialHasher>,
    pub pages: Arc<dyn PageRenderer>,
    pub payments: Arc<dyn PaymentGateway>,
    pub clock: Arc<dyn Clock>,
}

impl HttpState {
    /// Wire the domain services over the given adapters.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use bus_booking::domain::ports::AcknowledgingPaymentGateway;
    /// use bus_booking::inbound::http::state::{HttpState, HttpStateAdapters};
    /// use bus_booking::outbound::memory::{InMemoryBusRepository, InMemoryStudentRepository};
    /// use bus_booking::outbound::pages::TemplatePages;
    /// use bus_booking::outbound::security::Argon2CredentialHasher;
    /// use mockable::DefaultClock;
    ///
    /// let state = HttpState::from_adapters(HttpStateAdapters {
    ///     buses: Arc::new(InMemoryBusRepository::new()),
    ///     students: Arc::new(InMemoryStudentRepository::new()),
    ///     hasher: Arc::new(Argon2CredentialHasher::new()),
    ///     pages: Arc::new(TemplatePages::embedded()),
    ///     payments: Arc::new(AcknowledgingPaymentGateway),
    ///     clock: Arc::new(DefaultClock),
    /// });
    /// let _login = state.login.clone();
    /// ```
    pub fn from_adapters<B, S>(adapters: HttpStateAdapters<B, S>) -> Self
    where
        B: BusRepository + 'static,
        S: StudentRepository + 'static,
    {
        let HttpStateAdapters {
            buses,
            students,
            hasher,
            pages,
            payments,
            clock,
        } = adapters;

        let booking = Arc::new(BookingService::new(Arc::clone(&buses), clock));
        let schedule = Arc::new(BusScheduleService::new(buses));
        let accounts = Arc::new(StudentAccountService::new(students, hasher));

        Self {
            login: accounts.clone(),
            signup: accounts,
            seat_booking: booking.clone(),
            timetable: booking,
            schedule: schedule.clone(),
            schedule_query: schedule,
            pages,
            payments,
        }
    }
}
