//! API routes module

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use core_config::AppInfo;
use domain_catalog::{handlers, CatalogState};

use crate::openapi;

/// Complete application: catalog routes, OpenAPI document, health, shared layers
pub fn app(state: CatalogState, app_info: AppInfo) -> std::io::Result<Router> {
    let router = create_router(handlers::router(state), openapi::document())?;
    Ok(router.merge(health_router(app_info)))
}
