//! Seat booking values exchanged between the booking service and the bus
//! catalogue.

use chrono::{DateTime, Utc};

use super::{AdmissionNumber, BusId};

/// A request to take one seat on a bus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRequest {
    pub bus_id: BusId,
    /// Student holding the session, when the caller is logged in.
    pub student: Option<AdmissionNumber>,
}

impl SeatRequest {
    /// Anonymous request for a seat on `bus_id`.
    #[must_use]
    pub fn anonymous(bus_id: BusId) -> Self {
        Self {
            bus_id,
            student: None,
        }
    }

    /// Request attributed to a logged-in student.
    #[must_use]
    pub fn for_student(bus_id: BusId, student: AdmissionNumber) -> Self {
        Self {
            bus_id,
            student: Some(student),
        }
    }
}

/// What the catalogue needs to take a seat and write the ledger entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatClaim {
    pub bus_id: BusId,
    pub student: Option<AdmissionNumber>,
    pub booked_at: DateTime<Utc>,
}

/// Outcome of a successful seat booking.
///
/// ## Invariants
/// - `seats_remaining` is never negative.
/// - `seat_number` is `seats_remaining + 1`: the seat index just consumed,
///   counted down from capacity.
///
/// # Examples
/// ```
/// use bus_booking::domain::{BusId, SeatReservation};
///
/// let reservation = SeatReservation::after_booking(BusId::new(1).unwrap(), 29);
/// assert_eq!(reservation.seat_number(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeatReservation {
    bus_id: BusId,
    seats_remaining: i32,
}

impl SeatReservation {
    /// Describe a booking that left `seats_remaining` seats free.
    #[must_use]
    pub fn after_booking(bus_id: BusId, seats_remaining: i32) -> Self {
        Self {
            bus_id,
            seats_remaining,
        }
    }

    /// Bus the seat was taken on.
    #[must_use]
    pub fn bus_id(&self) -> BusId {
        self.bus_id
    }

    /// Seats still free after this booking.
    #[must_use]
    pub fn seats_remaining(&self) -> i32 {
        self.seats_remaining
    }

    /// Seat index consumed by this booking.
    #[must_use]
    pub fn seat_number(&self) -> i32 {
        self.seats_remaining.saturating_add(1)
    }
}

/// Ledger entry written alongside every successful seat decrement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub bus_id: BusId,
    pub student: Option<AdmissionNumber>,
    pub seat_number: i32,
    pub booked_at: DateTime<Utc>,
}

impl Booking {
    /// Build the ledger entry for a claim that produced `reservation`.
    #[must_use]
    pub fn from_claim(claim: &SeatClaim, reservation: SeatReservation) -> Self {
        Self {
            bus_id: claim.bus_id,
            student: claim.student.clone(),
            seat_number: reservation.seat_number(),
            booked_at: claim.booked_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn bus(id: i32) -> BusId {
        BusId::new(id).expect("positive id")
    }

    #[rstest]
    #[case(29, 30)]
    #[case(0, 1)]
    fn seat_number_is_one_above_remaining(#[case] remaining: i32, #[case] seat: i32) {
        let reservation = SeatReservation::after_booking(bus(1), remaining);
        assert_eq!(reservation.seat_number(), seat);
    }

    #[rstest]
    fn ledger_entry_copies_claim_attribution() {
        let student = AdmissionNumber::new("12-345").expect("valid number");
        let claim = SeatClaim {
            bus_id: bus(3),
            student: Some(student.clone()),
            booked_at: DateTime::<Utc>::UNIX_EPOCH,
        };
        let booking = Booking::from_claim(&claim, SeatReservation::after_booking(bus(3), 4));
        assert_eq!(booking.bus_id, bus(3));
        assert_eq!(booking.student, Some(student));
        assert_eq!(booking.seat_number, 5);
        assert_eq!(booking.booked_at, DateTime::<Utc>::UNIX_EPOCH);
    }

    #[rstest]
    fn anonymous_request_has_no_student() {
        assert!(SeatRequest::anonymous(bus(2)).student.is_none());
    }
}
