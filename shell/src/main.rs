//! Shell entry-point: loads configuration, prepares the account database
//! and serves the page router.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::info;

use rentitease_common::health::HealthState;
use rentitease_common::telemetry::init_tracing;
use rentitease_shell::ShellSettings;
use rentitease_shell::inbound::http::session_config::{BuildMode, session_settings_from_env};
use rentitease_shell::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings =
        ShellSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(std::io::Error::other)?;

    let database_path = settings.database_path();
    run_migrations(&database_path)
        .await
        .map_err(std::io::Error::other)?;
    let pool_config =
        PoolConfig::new(database_path.to_string_lossy()).with_max_size(settings.db_pool_size());
    let db_pool = DbPool::new(pool_config)
        .await
        .map_err(std::io::Error::other)?;

    let bind_addr = settings.bind_addr();
    let config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
        db_pool,
    );
    let server = create_server(web::Data::new(HealthState::new()), config)?;
    info!(%bind_addr, database = %database_path.display(), "shell listening");
    server.await
}
