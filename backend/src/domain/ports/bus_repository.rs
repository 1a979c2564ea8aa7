//! Port for the bus catalogue: schedule storage and the seat counter.

use async_trait::async_trait;

use crate::domain::{Bus, BusId, NewBus, SeatClaim, SeatReservation};

use super::define_port_error;

define_port_error! {
    /// Errors raised by bus repository adapters.
    pub enum BusRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "bus repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "bus repository query failed: {message}",
        /// No bus has the requested identifier.
        NotFound { bus_id: i32 } => "bus {bus_id} does not exist",
        /// The bus has no free seat left; nothing was written.
        SeatsUnavailable { bus_id: i32 } => "bus {bus_id} has no seats remaining",
    }
}

/// Port for storing buses and taking seats.
///
/// `reserve_seat` is the only operation that changes a seat count. Adapters
/// must decrement atomically (never read-then-write) and record the ledger
/// entry in the same unit of work.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusRepository: Send + Sync {
    /// Store a new bus with every seat free and return it with its id.
    async fn create(&self, bus: &NewBus) -> Result<Bus, BusRepositoryError>;

    /// Every bus ordered by id.
    async fn list_all(&self) -> Result<Vec<Bus>, BusRepositoryError>;

    /// Buses whose route matches exactly, ordered by id.
    async fn list_by_route(&self, route: &str) -> Result<Vec<Bus>, BusRepositoryError>;

    /// Look a bus up by id.
    async fn find_by_id(&self, id: BusId) -> Result<Option<Bus>, BusRepositoryError>;

    /// Take one seat and write the booking ledger entry.
    async fn reserve_seat(&self, claim: &SeatClaim)
    -> Result<SeatReservation, BusRepositoryError>;
}
