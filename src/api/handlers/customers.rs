//! Handlers for customer endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::dto::created::CreatedResponse;
use crate::api::dto::customer::{CreateCustomerRequest, UpdateCustomerRequest};
use crate::api::dto::pagination::{Page, PaginationParams};
use crate::api::extract::ValidatedJson;
use crate::domain::entities::CustomerResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new customer.
///
/// # Endpoint
///
/// `POST /api/customers`
///
/// # Request Body
///
/// ```json
/// {
///   "firstname": "Ada",
///   "lastname": "Lovelace",
///   "email": "ada@example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the email is already registered.
pub async fn create_customer_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCustomerRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = state.customer_service.create_customer(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// Updates the provided fields of a customer. Blank fields are ignored.
///
/// # Endpoint
///
/// `PUT /api/customers/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the customer doesn't exist.
pub async fn update_customer_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UpdateCustomerRequest>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state
        .customer_service
        .update_customer(id, payload.into())
        .await?;

    Ok(Json(customer))
}

/// Lists customers.
///
/// # Endpoint
///
/// `GET /api/customers?page=1&page_size=25`
pub async fn customer_list_handler(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Page<CustomerResponse>>, AppError> {
    let (offset, limit) = params.to_offset_limit()?;

    let (items, total) = state.customer_service.find_all(offset, limit).await?;

    Ok(Json(Page::new(&params, total, items)))
}

/// # Endpoint
///
/// `GET /api/customers/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the customer doesn't exist.
pub async fn get_customer_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerResponse>, AppError> {
    let customer = state.customer_service.find_by_id(id).await?;
    Ok(Json(customer))
}

/// Reports whether a customer exists.
///
/// # Endpoint
///
/// `GET /api/customers/exists/{id}`
pub async fn customer_exists_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<bool>, AppError> {
    let exists = state.customer_service.exists_by_id(id).await?;
    Ok(Json(exists))
}

/// Deletes a customer.
///
/// # Endpoint
///
/// `DELETE /api/customers/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the customer doesn't exist.
/// Returns 409 Conflict if the customer still has orders.
pub async fn delete_customer_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.customer_service.delete_customer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
