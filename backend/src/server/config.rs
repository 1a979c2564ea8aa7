//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::cookie::{Key, SameSite};
use bus_booking::domain::ports::PageRenderer;
use bus_booking::outbound::pages::TemplatePages;
use bus_booking::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) pages: Arc<dyn PageRenderer>,
}

impl ServerConfig {
    /// Construct a configuration serving embedded templates from memory stores.
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            db_pool: None,
            pages: Arc::new(TemplatePages::embedded()),
        }
    }

    /// Attach a database connection pool; buses and students are then
    /// stored in PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Replace the page renderer.
    #[must_use]
    pub fn with_pages(mut self, pages: Arc<dyn PageRenderer>) -> Self {
        self.pages = pages;
        self
    }
}
