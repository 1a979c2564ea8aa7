//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `BUS_BOOKING_*` environment variables and an
//! optional configuration file, in that order of precedence.

use std::net::SocketAddr;
use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::persistence::PoolConfig;

/// Failures interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address '{value}': {message}")]
    BindAddr { value: String, message: String },
}

/// Runtime settings for the booking server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BUS_BOOKING")]
pub struct AppSettings {
    /// Socket address to listen on.
    #[ortho_config(default = "0.0.0.0:7000".to_owned())]
    pub bind_addr: String,
    /// PostgreSQL URL. Buses and students are kept in memory when unset.
    pub database_url: Option<String>,
    /// Directory holding the page templates. Embedded copies are used when unset.
    pub templates_dir: Option<PathBuf>,
    /// Upper bound on pooled database connections.
    pub pool_max_size: Option<u32>,
}

impl AppSettings {
    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the configured value is not a
    /// socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: self.bind_addr.clone(),
            message: err.to_string(),
        })
    }

    /// Pool settings when a database is configured.
    #[must_use]
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url.as_deref().filter(|url| !url.trim().is_empty())?;
        let config = PoolConfig::new(url);
        Some(match self.pool_max_size {
            Some(max_size) => config.with_max_size(max_size),
            None => config,
        })
    }
}
