//! Handlers for product catalog endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::created::CreatedResponse;
use crate::api::dto::pagination::{Page, PaginationParams};
use crate::api::dto::product::{CreateProductRequest, PurchaseProductsRequest};
use crate::api::extract::ValidatedJson;
use crate::domain::entities::{Product, PurchaseResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Adds a product to the catalog.
///
/// # Endpoint
///
/// `POST /api/products`
pub async fn create_product_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = state.product_service.create_product(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// `GET /api/products?page=1&page_size=25`
pub async fn product_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<Product>>, AppError> {
    let (offset, limit) = params.to_offset_limit()?;

    let (items, total) = state.product_service.find_all(offset, limit).await?;

    Ok(Json(Page::new(&params, total, items)))
}

/// `GET /api/products/{id}`
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, AppError> {
    let product = state.product_service.find_by_id(id).await?;
    Ok(Json(product))
}

/// Purchases products, decrementing their stock.
///
/// # Endpoint
///
/// `POST /api/products/purchase`
///
/// # Request Body
///
/// ```json
/// {
///   "products": [
///     { "product_id": 42, "quantity": 2 }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or stock is insufficient.
/// Returns 404 Not Found if a product doesn't exist.
pub async fn purchase_products_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PurchaseProductsRequest>,
) -> Result<Json<Vec<PurchaseResponse>>, AppError> {
    let requests = payload.products.into_iter().map(Into::into).collect();
    let purchased = state.product_service.purchase_products(requests).await?;

    Ok(Json(purchased))
}
