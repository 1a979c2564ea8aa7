//! HTTP inbound adapter serving the booking pages and JSON endpoints.

pub mod accounts;
pub mod admin;
pub mod booking;
pub mod error;
pub mod health;
pub mod pages;
pub mod routes;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
