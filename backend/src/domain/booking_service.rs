//! Seat booking and route timetable services.
//!
//! Implements [`SeatBookingCommand`] and [`RouteTimetableQuery`] over a
//! [`BusRepository`]. The seat count itself is guarded by the repository's
//! atomic `reserve_seat`; this service translates outcomes into domain
//! errors and stamps each claim with the booking time.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    BusRepository, BusRepositoryError, RouteTimetableQuery, SeatBookingCommand,
};
use crate::domain::{Bus, Error, SeatClaim, SeatRequest, SeatReservation};

/// Message returned when the bus has no seat left.
pub const SEATS_UNAVAILABLE_MESSAGE: &str = "Seats are unavailable";

/// Booking service implementing the seat and timetable driving ports.
#[derive(Clone)]
pub struct BookingService<R> {
    buses: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> BookingService<R> {
    /// Create a new service over the given bus repository.
    pub fn new(buses: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { buses, clock }
    }
}

pub(crate) fn map_bus_repository_error(error: BusRepositoryError) -> Error {
    match error {
        BusRepositoryError::NotFound { bus_id } => Error::invalid_request("Invalid bus ID")
            .with_details(json!({ "field": "busID", "code": "unknown_bus", "busId": bus_id })),
        BusRepositoryError::SeatsUnavailable { bus_id } => {
            Error::seats_unavailable(SEATS_UNAVAILABLE_MESSAGE)
                .with_details(json!({ "busId": bus_id }))
        }
        BusRepositoryError::Connection { message } => {
            Error::internal(format!("bus repository unavailable: {message}"))
        }
        BusRepositoryError::Query { message } => {
            Error::internal(format!("bus repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> SeatBookingCommand for BookingService<R>
where
    R: BusRepository,
{
    async fn book_seat(&self, request: &SeatRequest) -> Result<SeatReservation, Error> {
        let claim = SeatClaim {
            bus_id: request.bus_id,
            student: request.student.clone(),
            booked_at: self.clock.utc(),
        };
        let reservation = self
            .buses
            .reserve_seat(&claim)
            .await
            .map_err(map_bus_repository_error)?;
        info!(
            bus_id = reservation.bus_id().get(),
            seats_remaining = reservation.seats_remaining(),
            seat_number = reservation.seat_number(),
            attributed = claim.student.is_some(),
            "seat booked"
        );
        Ok(reservation)
    }
}

#[async_trait]
impl<R> RouteTimetableQuery for BookingService<R>
where
    R: BusRepository,
{
    async fn buses_for_route(&self, route: &str) -> Result<Vec<Bus>, Error> {
        let buses = self
            .buses
            .list_by_route(route)
            .await
            .map_err(map_bus_repository_error)?;
        debug!(route, count = buses.len(), "route timetable read");
        Ok(buses)
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
