//! HTTP handlers for `/categories`

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
    self, check_id_length, find_element_index, select_category_collection, Match,
    RequestContext, Step,
};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, Product, Record};
use crate::state::CatalogState;

const GET_CHAIN: &[Step] = &[check_id_length];
const PRODUCTS_CHAIN: &[Step] = &[check_id_length];
const CREATE_CHAIN: &[Step] = &[];
const REPLACE_CHAIN: &[Step] = &[check_id_length, select_category_collection, find_element_index];
const DELETE_CHAIN: &[Step] = &[check_id_length, select_category_collection, find_element_index];

/// OpenAPI documentation for the category routes
#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        get_category,
        list_category_products,
        create_category,
        replace_category,
        delete_category,
    ),
    components(schemas(Category, Product)),
    tags((name = "Categories", description = "Category management endpoints"))
)]
pub struct CategoriesApi;

/// Router for the category resource family
pub fn router(state: CatalogState) -> Router {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category)
                .put(replace_category)
                .delete(delete_category),
        )
        .route("/categories/{id}/products", get(list_category_products))
        .with_state(state)
}

/// List all categories in insertion order
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>)
    )
)]
async fn list_categories(State(state): State<CatalogState>) -> Json<Vec<Category>> {
    let catalog = state.read().await;
    Json(catalog.categories.as_slice().to_vec())
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category ID (36 characters)")),
    responses(
        (status = 200, description = "Category found", body = Category),
        (status = 400, description = "Id should be 36 characters long", body = String, content_type = "text/plain"),
        (status = 404, description = "Category not found", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state))]
async fn get_category(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Category>> {
    let mut cx = RequestContext::for_path(id);
    let catalog = state.read().await;
    chain::run(GET_CHAIN, &mut cx, &catalog)?;

    catalog
        .categories
        .find(cx.path_id())
        .cloned()
        .map(Json)
        .ok_or(CatalogError::CategoryNotFound)
}

/// List the products referencing a category.
///
/// Products are returned even when the category itself no longer exists;
/// an empty result is only a 404 when the category is unknown as well.
#[utoipa::path(
    get,
    path = "/categories/{id}/products",
    tag = "Categories",
    params(("id" = String, Path, description = "Category ID (36 characters)")),
    responses(
        (status = 200, description = "Products in the category", body = Vec<Product>),
        (status = 400, description = "Id should be 36 characters long", body = String, content_type = "text/plain"),
        (status = 404, description = "Category not found", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state))]
async fn list_category_products(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> CatalogResult<Json<Vec<Product>>> {
    let mut cx = RequestContext::for_path(id);
    let catalog = state.read().await;
    chain::run(PRODUCTS_CHAIN, &mut cx, &catalog)?;

    let products = catalog.products_in_category(cx.path_id());
    if products.is_empty() && !catalog.categories.contains(cx.path_id()) {
        return Err(CatalogError::CategoryNotFound);
    }
    Ok(Json(products))
}

/// Create a category; the server assigns its ID
#[utoipa::path(
    post,
    path = "/categories",
    tag = "Categories",
    request_body = Category,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 400, description = "Malformed body", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state, body))]
async fn create_category(
    State(state): State<CatalogState>,
    body: Result<Json<Value>, JsonRejection>,
) -> CatalogResult<(StatusCode, Json<Category>)> {
    let mut cx = RequestContext::new().with_body(body);
    let mut catalog = state.write().await;
    chain::run(CREATE_CHAIN, &mut cx, &catalog)?;

    let mut category: Category = cx.take_record()?;
    category.assign_id(state.generate_id());
    let stored = catalog.categories.push(category).clone();

    tracing::info!(category_id = %stored.id, "Created category");
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Replace a category wholesale, keeping its ID
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category ID (36 characters)")),
    request_body = Category,
    responses(
        (status = 200, description = "Category replaced", body = Category),
        (status = 400, description = "Bad id length or malformed body", body = String, content_type = "text/plain"),
        (status = 404, description = "Not Found", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state, body))]
async fn replace_category(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> CatalogResult<Json<Category>> {
    let mut cx = RequestContext::for_path(id).with_body(body);
    let mut catalog = state.write().await;
    chain::run(REPLACE_CHAIN, &mut cx, &catalog)?;

    let Match { index, id } = cx.take_match()?;
    let mut category: Category = cx.take_record()?;
    category.assign_id(id);
    let stored = catalog
        .categories
        .replace(index, category)
        .cloned()
        .ok_or(CatalogError::ElementNotFound)?;

    tracing::info!(category_id = %stored.id, "Replaced category");
    Ok(Json(stored))
}

/// Delete a category. Products referencing it are left untouched.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = String, Path, description = "Category ID (36 characters)")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Id should be 36 characters long", body = String, content_type = "text/plain"),
        (status = 404, description = "Not Found", body = String, content_type = "text/plain")
    )
)]
#[instrument(skip(state))]
async fn delete_category(
    State(state): State<CatalogState>,
    Path(id): Path<String>,
) -> CatalogResult<StatusCode> {
    let mut cx = RequestContext::for_path(id);
    let mut catalog = state.write().await;
    chain::run(DELETE_CHAIN, &mut cx, &catalog)?;

    let Match { index, id } = cx.take_match()?;
    catalog
        .categories
        .remove(index)
        .ok_or(CatalogError::ElementNotFound)?;

    tracing::info!(category_id = %id, "Deleted category");
    Ok(StatusCode::NO_CONTENT)
}
