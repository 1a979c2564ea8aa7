//! Admin bus schedule service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::booking_service::map_bus_repository_error;
use crate::domain::ports::{BusRepository, BusScheduleCommand, BusScheduleQuery};
use crate::domain::{Bus, Error, NewBus};

/// Service implementing the admin schedule driving ports.
#[derive(Clone)]
pub struct BusScheduleService<R> {
    buses: Arc<R>,
}

impl<R> BusScheduleService<R> {
    /// Create a new service over the given bus repository.
    pub fn new(buses: Arc<R>) -> Self {
        Self { buses }
    }
}

#[async_trait]
impl<R> BusScheduleCommand for BusScheduleService<R>
where
    R: BusRepository,
{
    async fn add_bus(&self, bus: &NewBus) -> Result<Bus, Error> {
        let created = self
            .buses
            .create(bus)
            .await
            .map_err(map_bus_repository_error)?;
        info!(
            bus_id = created.id.get(),
            route = %created.route,
            day = %created.day,
            capacity = created.capacity,
            "bus added"
        );
        Ok(created)
    }
}

#[async_trait]
impl<R> BusScheduleQuery for BusScheduleService<R>
where
    R: BusRepository,
{
    async fn list_buses(&self) -> Result<Vec<Bus>, Error> {
        self.buses
            .list_all()
            .await
            .map_err(map_bus_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{BusRepositoryError, MockBusRepository};
    use crate::domain::{BusId, ErrorCode};
    use rstest::rstest;

    fn new_bus() -> NewBus {
        NewBus::try_from_parts("Evening run", "45", "Friday", "17:15", "Town-Campus")
            .expect("valid form")
    }

    #[rstest]
    #[tokio::test]
    async fn add_bus_returns_created_bus() {
        let mut repo = MockBusRepository::new();
        repo.expect_create().times(1).return_once(|bus| {
            Ok(Bus::from_new(
                BusId::new(4).expect("positive id"),
                bus.clone(),
            ))
        });

        let service = BusScheduleService::new(Arc::new(repo));
        let bus = service.add_bus(&new_bus()).await.expect("bus created");

        assert_eq!(bus.id.get(), 4);
        assert_eq!(bus.seats_remaining, 45);
    }

    #[rstest]
    #[tokio::test]
    async fn add_bus_maps_storage_errors_to_internal() {
        let mut repo = MockBusRepository::new();
        repo.expect_create()
            .times(1)
            .return_once(|_| Err(BusRepositoryError::connection("refused")));

        let service = BusScheduleService::new(Arc::new(repo));
        let error = service.add_bus(&new_bus()).await.expect_err("failure");

        assert_eq!(error.code(), ErrorCode::InternalError);
    }

    #[rstest]
    #[tokio::test]
    async fn list_buses_reads_everything() {
        let mut repo = MockBusRepository::new();
        repo.expect_list_all().times(1).return_once(|| {
            Ok(vec![Bus::from_new(
                BusId::new(1).expect("positive id"),
                new_bus(),
            )])
        });

        let service = BusScheduleService::new(Arc::new(repo));
        let buses = service.list_buses().await.expect("listing succeeds");

        assert_eq!(buses.len(), 1);
    }
}
