//! Campus bus booking service.
//!
//! Students register and log in, look up the buses serving a route and book
//! seats; administrators maintain the bus schedule. The crate follows a
//! hexagonal layout: [`domain`] owns the rules and ports, [`inbound`] holds
//! the HTTP adapter and [`outbound`] the storage, hashing and template
//! adapters.

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
