//! Driving port listing the buses serving a route.

use async_trait::async_trait;

use crate::domain::{Bus, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RouteTimetableQuery: Send + Sync {
    /// Buses whose route equals `route` exactly (case-sensitive).
    async fn buses_for_route(&self, route: &str) -> Result<Vec<Bus>, Error>;
}
