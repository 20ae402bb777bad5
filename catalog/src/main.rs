//! Catalog entry-point: loads configuration and serves the browse pages.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::info;

use rentitease_catalog::CatalogSettings;
use rentitease_common::health::HealthState;
use rentitease_common::telemetry::init_tracing;
use server::create_server;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let settings =
        CatalogSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let bind_addr = settings.bind_addr();
    let server = create_server(web::Data::new(HealthState::new()), bind_addr)?;
    info!(%bind_addr, "catalog listening");
    server.await
}
