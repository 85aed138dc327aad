//! HTTP handlers for `/products`

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;
use tracing::instrument;
use utoipa::OpenApi;

use crate::chain::{
    self, check_id_length, check_name_length, find_element_index, select_product_collection,
    Match, RequestContext, Step,
};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Product, Record};
use crate::state::CatalogState;

const GET_CHAIN: &[Step] = &[check_id_length];
const CREATE_CHAIN: &[Step] = &[check_name_length];
const REPLACE_CHAIN: &[Step] = &[
    check_id_length,
    check_name_length,
    select_product_collection,
    find_element_index,
];
const DELETE_CHAIN: &[Step] = &[check_id_length, select_product_collection, find_element_index];

/// OpenAPI documentation for the product routes
#[derive(OpenApi)]
#[openapi(
    paths(list_products, get_product, create_product, replace_product, delete_product),
    components(schemas(Product)),
    tags((name = "Products", description = "Product management endpoints"))
)]
pub struct ProductsApi;

/// Router for the product resource family
pub fn router(state: CatalogState) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(replace_product).delete(delete_product),
        )
        .with_state(state)
}

/// List all products in insertion order
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>)
    )
)]
async fn list_products(State(state): State<CatalogState>) -> Json<Vec<Product>> {
    let catalog = state.read().await;
    Json(catalog.products.as_slice().to_vec())
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID (36 characters)")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Id should be 36 characters long", body = String, content_type = "text/plain"),
        (status = 404, description = "product not found", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state))]
async fn get_product(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Product>> {
    let mut cx = RequestContext::for_path(id);
    let catalog = state.read().await;
    chain::run(GET_CHAIN, &mut cx, &catalog)?;

    catalog
        .products
        .find(cx.path_id())
        .cloned()
        .map(Json)
        .ok_or(CatalogError::ProductNotFound)
}

/// Create a product; the server assigns its ID
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = Product,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Malformed body", body = String, content_type = "text/plain"),
        (status = 409, description = "Name should be 3 characters minimum", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state, body))]
async fn create_product(
    State(state): State<CatalogState>,
    body: Result<Json<Value>, JsonRejection>,
) -> CatalogResult<(StatusCode, Json<Product>)> {
    let mut cx = RequestContext::new().with_body(body);
    let mut catalog = state.write().await;
    chain::run(CREATE_CHAIN, &mut cx, &catalog)?;

    let mut product: Product = cx.take_record()?;
    product.assign_id(state.generate_id());
    let stored = catalog.products.push(product).clone();

    tracing::info!(product_id = %stored.id, "Created product");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Replace a product wholesale, keeping its ID
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID (36 characters)")),
    request_body = Product,
    responses(
        (status = 200, description = "Product replaced", body = Product),
        (status = 400, description = "Bad id length or malformed body", body = String, content_type = "text/plain"),
        (status = 404, description = "Not Found", body = String, content_type = "text/plain"),
        (status = 409, description = "Name should be 3 characters minimum", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state, body))]
async fn replace_product(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> CatalogResult<Json<Product>> {
    let mut cx = RequestContext::for_path(id).with_body(body);
    let mut catalog = state.write().await;
    chain::run(REPLACE_CHAIN, &mut cx, &catalog)?;

    let Match { index, id } = cx.take_match()?;
    let mut product: Product = cx.take_record()?;
    product.assign_id(id);
    let stored = catalog
        .products
        .replace(index, product)
        .cloned()
        .ok_or(CatalogError::ElementNotFound)?;

    tracing::info!(product_id = %stored.id, "Replaced product");
    Ok(Json(stored))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = String, Path, description = "Product ID (36 characters)")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Id should be 36 characters long", body = String, content_type = "text/plain"),
        (status = 404, description = "Not Found", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state))]
async fn delete_product(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> CatalogResult<StatusCode> {
    let mut cx = RequestContext::for_path(id);
    let mut catalog = state.write().await;
    chain::run(DELETE_CHAIN, &mut cx, &catalog)?;

    let Match { index, id } = cx.take_match()?;
    catalog
        .products
        .remove(index)
        .ok_or(CatalogError::ElementNotFound)?;

    tracing::info!(product_id = %id, "Deleted product");
    Ok(StatusCode::NO_CONTENT)
}
