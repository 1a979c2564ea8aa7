//! Builders wiring the HTTP state over PostgreSQL or in-memory adapters.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use bus_booking::domain::ports::{AcknowledgingPaymentGateway, PageRenderer};
use bus_booking::inbound::http::state::{HttpState, HttpStateAdapters};
use bus_booking::outbound::memory::{InMemoryBusRepository, InMemoryStudentRepository};
use bus_booking::outbound::persistence::{DbPool, DieselBusRepository, DieselStudentRepository};
use bus_booking::outbound::security::Argon2CredentialHasher;

use super::ServerConfig;

fn adapters<B, S>(
    buses: B,
    students: S,
    pages: Arc<dyn PageRenderer>,
) -> HttpStateAdapters<B, S> {
    HttpStateAdapters {
        buses: Arc::new(buses),
        students: Arc::new(students),
        hasher: Arc::new(Argon2CredentialHasher::new()),
        pages,
        payments: Arc::new(AcknowledgingPaymentGateway),
        clock: Arc::new(DefaultClock),
    }
}

fn build_state(pool: Option<&DbPool>, pages: Arc<dyn PageRenderer>) -> HttpState {
    match pool {
        Some(pool) => HttpState::from_adapters(adapters(
            DieselBusRepository::new(pool.clone()),
            DieselStudentRepository::new(pool.clone()),
            pages,
        )),
        None => {
            info!("no database configured; buses and students are kept in memory");
            HttpState::from_adapters(adapters(
                InMemoryBusRepository::new(),
                InMemoryStudentRepository::new(),
                pages,
            ))
        }
    }
}

/// Build the shared HTTP state from the configured pool and renderer.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(build_state(config.db_pool.as_ref(), config.pages.clone()))
}
