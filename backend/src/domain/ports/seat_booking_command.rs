//! Driving port for booking a seat.

use async_trait::async_trait;

use crate::domain::{Error, SeatRequest, SeatReservation};

/// Domain use-case port for seat booking.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeatBookingCommand: Send + Sync {
    /// Take one seat on the requested bus.
    async fn book_seat(&self, request: &SeatRequest) -> Result<SeatReservation, Error>;
}
