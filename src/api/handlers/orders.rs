//! Handlers for order endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::created::CreatedResponse;
use crate::api::dto::order::{OrderRequest, OrderResponse};
use crate::api::dto::pagination::{Page, PaginationParams};
use crate::api::extract::ValidatedJson;
use crate::domain::entities::OrderLineResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Places an order.
///
/// # Endpoint
///
/// `POST /api/orders`
///
/// # Request Body
///
/// ```json
/// {
///   "reference": "ORD-2024-001",
///   "amount": "59.98",
///   "payment_method": "CREDIT_CARD",
///   "customer_id": 1,
///   "products": [
///     { "product_id": 42, "quantity": 1 },
///     { "product_id": 43, "quantity": 1 }
///   ]
/// }
/// ```
///
/// The order confirmation is published in the background after the
/// response is produced.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails or stock is insufficient.
/// Returns 404 Not Found if the customer or a product doesn't exist.
/// Returns 409 Conflict if the reference is already used.
pub async fn create_order_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<OrderRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = state.order_service.create_order(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Lists orders, newest first.
///
/// # Endpoint
///
/// `GET /api/orders?page=1&page_size=25`
pub async fn order_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<OrderResponse>>, AppError> {
    let (offset, limit) = params.to_offset_limit()?;

    let (orders, total) = state.order_service.find_all(offset, limit).await?;
    let items = orders.into_iter().map(OrderResponse::from).collect();

    Ok(Json(Page::new(&params, total, items)))
}

/// `GET /api/orders/{id}`
pub async fn get_order_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OrderResponse>, AppError> {
    let order = state.order_service.find_by_id(id).await?;
    Ok(Json(order.into()))
}

/// Lists the lines of an order.
///
/// # Endpoint
///
/// `GET /api/orders/{id}/lines`
///
/// # Errors
///
/// Returns 404 Not Found if the order doesn't exist.
pub async fn order_lines_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<OrderLineResponse>>, AppError> {
    let order = state.order_service.find_by_id(id).await?;
    let lines = state.order_line_service.find_all_by_order_id(order.id).await?;

    Ok(Json(lines))
}
