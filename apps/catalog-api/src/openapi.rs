//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Service-level metadata; paths come from the domain routers
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "In-memory products and categories over REST",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
pub struct ApiDoc;

/// Full document served at `/api-docs/openapi.json`
pub fn document() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.merge(domain_catalog::handlers::openapi());
    doc
}
