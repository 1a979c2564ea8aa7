//! Backend entry-point: loads settings, selects storage and serves the site.

mod server;

use std::sync::Arc;

use actix_web::web;
use color_eyre::eyre::{Context, Result, eyre};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bus_booking::config::AppSettings;
use bus_booking::domain::ports::PageRenderer;
use bus_booking::inbound::http::health::HealthState;
use bus_booking::inbound::http::session_config::{BuildMode, session_settings_from_env};
use bus_booking::outbound::pages::TemplatePages;
use bus_booking::outbound::persistence::{DbPool, run_pending_migrations};

use server::{ServerConfig, create_server};

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn template_renderer(settings: &AppSettings) -> Result<Arc<dyn PageRenderer>> {
    match &settings.templates_dir {
        Some(dir) => {
            let pages = TemplatePages::from_dir(dir)
                .wrap_err_with(|| format!("open templates directory {}", dir.display()))?;
            info!(path = %dir.display(), "serving templates from directory");
            Ok(Arc::new(pages))
        }
        None => Ok(Arc::new(TemplatePages::embedded())),
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let settings = AppSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let bind_addr = settings.bind_addr()?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("invalid session configuration")?;

    let mut config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
    )
    .with_pages(template_renderer(&settings)?);

    if let Some(pool_config) = settings.pool_config() {
        run_pending_migrations(pool_config.database_url())
            .await
            .wrap_err("apply database migrations")?;
        let pool = DbPool::new(pool_config)
            .await
            .wrap_err("build database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "bus booking server listening");
    server.await?;
    Ok(())
}
