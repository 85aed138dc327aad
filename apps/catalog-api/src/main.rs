//! Catalog API - in-memory products and categories over REST

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use domain_catalog::CatalogState;
use eyre::WrapErr;
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod seed;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let catalog = seed::load_catalog(&config.seed).await?;
    let state = CatalogState::new(catalog);

    let app = api::app(state.clone(), config.app).wrap_err("failed to build router")?;

    info!(
        "Starting {} v{} on port {}",
        config.app.name, config.app.version, config.server.port
    );

    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        let catalog = state.read().await;
        info!(
            products = catalog.products.len(),
            categories = catalog.categories.len(),
            "catalog discarded on shutdown"
        );
    })
    .await
    .wrap_err("server error")?;

    info!("Catalog API shutdown complete");
    Ok(())
}
