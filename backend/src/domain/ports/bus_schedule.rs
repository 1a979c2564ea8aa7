//! Driving ports for the admin bus schedule.

use async_trait::async_trait;

use crate::domain::{Bus, Error, NewBus};

/// Adds buses to the schedule.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusScheduleCommand: Send + Sync {
    /// Store a validated bus with every seat free.
    async fn add_bus(&self, bus: &NewBus) -> Result<Bus, Error>;
}

/// Reads the full schedule for the admin page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BusScheduleQuery: Send + Sync {
    /// Every bus ordered by id.
    async fn list_buses(&self) -> Result<Vec<Bus>, Error>;
}
