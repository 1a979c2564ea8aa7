//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;

use crate::domain::ports::{
    AcknowledgingPaymentGateway, MockBusScheduleCommand, MockBusScheduleQuery, MockLoginService,
    MockPageRenderer, MockRouteTimetableQuery, MockSeatBookingCommand, MockSignupService,
};
use crate::inbound::http::state::HttpState;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie set by a response.
pub fn session_cookie(response: &ServiceResponse) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie set")
        .into_owned()
}

/// Mock ports for handler tests; set expectations, then call [`MockPorts::into_state`].
#[derive(Default)]
pub struct MockPorts {
    pub login: MockLoginService,
    pub signup: MockSignupService,
    pub seat_booking: MockSeatBookingCommand,
    pub timetable: MockRouteTimetableQuery,
    pub schedule: MockBusScheduleCommand,
    pub schedule_query: MockBusScheduleQuery,
    pub pages: MockPageRenderer,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState {
            login: Arc::new(self.login),
            signup: Arc::new(self.signup),
            seat_booking: Arc::new(self.seat_booking),
            timetable: Arc::new(self.timetable),
            schedule: Arc::new(self.schedule),
            schedule_query: Arc::new(self.schedule_query),
            pages: Arc::new(self.pages),
            payments: Arc::new(AcknowledgingPaymentGateway),
        }
    }
}
