//! Backend entry-point: loads settings, prepares the database and serves
//! the school directory API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use school_directory::inbound::http::health::HealthState;
use school_directory::outbound::persistence::{DbPool, run_pending_migrations};
use school_directory::settings::ServerSettings;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
    color_eyre::install()?;

    let settings = ServerSettings::load_from_iter(std::env::args_os().collect::<Vec<OsString>>())
        .map_err(|error| eyre!("failed to load settings: {error}"))?;
    let pool_config = settings.pool_config()?;
    let bind_addr = settings.bind_addr()?;

    let pool = DbPool::new(pool_config)
        .await
        .wrap_err("failed to connect to the database")?;
    info!("database pool ready");

    if settings.run_migrations() {
        run_pending_migrations(settings.database_url()?)
            .await
            .wrap_err("failed to apply migrations")?;
    } else {
        info!(reason = "disabled", "database migrations skipped");
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, pool))?;
    info!(%bind_addr, "listening");
    server.await?;
    Ok(())
}
