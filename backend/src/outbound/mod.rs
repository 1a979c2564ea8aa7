//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: process-local repositories for running without a database
//! - **security**: Argon2id credential hashing
//! - **pages**: HTML templates for the server-rendered routes
//!
//! Adapters are thin translators between domain types and infrastructure
//! representations. They contain no business logic.

pub mod memory;
pub mod pages;
pub mod persistence;
pub mod security;
