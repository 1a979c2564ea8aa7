//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the bus and student repository ports backed
//! by PostgreSQL via `diesel-async` and `bb8` pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: `models.rs` and `schema.rs` never leave this module.
//! - **Typed errors**: database failures map onto the port error enums.
//!
//! # Example
//!
//! ```ignore
//! use bus_booking::outbound::persistence::{DbPool, DieselBusRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/bus_booking")).await?;
//! let buses = DieselBusRepository::new(pool);
//! ```

mod diesel_bus_repository;
mod diesel_student_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_bus_repository::DieselBusRepository;
pub use diesel_student_repository::DieselStudentRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
