//! HTTP routers for the catalog.
//!
//! Two independent routers serve the product and category resource
//! families; [`router`] merges them for an application.

pub mod categories;
pub mod products;

use axum::Router;
use utoipa::OpenApi;

use crate::state::CatalogState;

pub use categories::CategoriesApi;
pub use products::ProductsApi;

/// Both resource families on one router, sharing the same catalog
pub fn router(state: CatalogState) -> Router {
    Router::new()
        .merge(products::router(state.clone()))
        .merge(categories::router(state))
}

/// OpenAPI document covering both routers
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ProductsApi::openapi();
    doc.merge(CategoriesApi::openapi());
    doc
}
