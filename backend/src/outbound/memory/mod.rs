//! In-memory adapters for running without PostgreSQL.
//!
//! State lives for the lifetime of the process only.

mod bus_store;
mod student_store;

pub use bus_store::InMemoryBusRepository;
pub use student_store::InMemoryStudentRepository;
