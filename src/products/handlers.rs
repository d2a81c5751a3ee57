use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{CreateProductRequest, MessageResponse, ProductCreatedResponse, UpdateProductRequest},
    repo_types::Product,
};
use crate::{
    auth::AuthUser,
    error::ApiError,
    extract::{ApiJson, ApiPath},
    state::AppState,
};

pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:pid",
            get(get_product).put(update_product).delete(delete_product),
        )
}

const NOT_FOUND: ApiError = ApiError::NotFound("Product not found");

#[instrument(skip(state, auth, payload), fields(caller = auth.id))]
pub async fn create_product(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(payload): ApiJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<ProductCreatedResponse>), ApiError> {
    let product = state.products.create(payload.into_new()?).await?;
    info!(pid = product.pid, "product added");
    Ok((
        StatusCode::CREATED,
        Json(ProductCreatedResponse {
            message: "Product added",
            product,
        }),
    ))
}

#[instrument(skip(state, auth), fields(caller = auth.id))]
pub async fn list_products(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.list().await?;
    Ok(Json(products))
}

#[instrument(skip(state, auth), fields(caller = auth.id))]
pub async fn get_product(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(pid): ApiPath<i32>,
) -> Result<Json<Product>, ApiError> {
    match state.products.get(pid).await? {
        Some(product) => Ok(Json(product)),
        None => {
            warn!(pid, "product not found");
            Err(NOT_FOUND)
        }
    }
}

#[instrument(skip(state, auth, payload), fields(caller = auth.id))]
pub async fn update_product(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(pid): ApiPath<i32>,
    ApiJson(payload): ApiJson<UpdateProductRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.products.update(pid, payload.into_changes()?).await? {
        warn!(pid, "update of unknown product");
        return Err(NOT_FOUND);
    }
    info!(pid, "product updated");
    Ok(Json(MessageResponse {
        message: "Product updated",
    }))
}

#[instrument(skip(state, auth), fields(caller = auth.id))]
pub async fn delete_product(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(pid): ApiPath<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    if !state.products.delete(pid).await? {
        warn!(pid, "delete of unknown product");
        return Err(NOT_FOUND);
    }
    info!(pid, "product deleted");
    Ok(Json(MessageResponse {
        message: "Product deleted",
    }))
}
