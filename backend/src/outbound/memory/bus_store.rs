//! Process-local `BusRepository` used when no database is configured.
//!
//! All state sits behind one mutex, so the seat check, the decrement and the
//! ledger append happen as a single step with respect to other callers.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{BusRepository, BusRepositoryError};
use crate::domain::{Booking, Bus, BusId, NewBus, SeatClaim, SeatReservation};

#[derive(Debug, Default)]
struct BusStore {
    buses: Vec<Bus>,
    bookings: Vec<Booking>,
    last_id: i32,
}

/// In-memory bus catalogue and booking ledger.
#[derive(Debug, Default)]
pub struct InMemoryBusRepository {
    store: Mutex<BusStore>,
}

impl InMemoryBusRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the booking ledger in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`BusRepositoryError::Query`] if the store lock is poisoned.
    pub fn bookings(&self) -> Result<Vec<Booking>, BusRepositoryError> {
        Ok(self.lock()?.bookings.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, BusStore>, BusRepositoryError> {
        self.store
            .lock()
            .map_err(|_| BusRepositoryError::query("bus store lock poisoned"))
    }
}

#[async_trait]
impl BusRepository for InMemoryBusRepository {
    async fn create(&self, bus: &NewBus) -> Result<Bus, BusRepositoryError> {
        let mut store = self.lock()?;
        let next = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| BusRepositoryError::query("bus id sequence exhausted"))?;
        let id = BusId::new(next).map_err(|err| BusRepositoryError::query(err.to_string()))?;
        let created = Bus::from_new(id, bus.clone());
        store.last_id = next;
        store.buses.push(created.clone());
        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<Bus>, BusRepositoryError> {
        Ok(self.lock()?.buses.clone())
    }

    async fn list_by_route(&self, route: &str) -> Result<Vec<Bus>, BusRepositoryError> {
        let store = self.lock()?;
        Ok(store
            .buses
            .iter()
            .filter(|bus| bus.route == route)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: BusId) -> Result<Option<Bus>, BusRepositoryError> {
        let store = self.lock()?;
        Ok(store.buses.iter().find(|bus| bus.id == id).cloned())
    }

    async fn reserve_seat(
        &self,
        claim: &SeatClaim,
    ) -> Result<SeatReservation, BusRepositoryError> {
        let mut store = self.lock()?;
        let bus_id = claim.bus_id;
        let bus = store
            .buses
            .iter_mut()
            .find(|bus| bus.id == bus_id)
            .ok_or_else(|| BusRepositoryError::not_found(bus_id.get()))?;
        if !bus.has_free_seat() {
            return Err(BusRepositoryError::seats_unavailable(bus_id.get()));
        }
        bus.seats_remaining -= 1;
        let reservation = SeatReservation::after_booking(bus_id, bus.seats_remaining);
        store.bookings.push(Booking::from_claim(claim, reservation));
        Ok(reservation)
    }
}
