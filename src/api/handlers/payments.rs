//! Handler for payment endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::created::CreatedResponse;
use crate::api::dto::payment::CreatePaymentRequest;
use crate::api::extract::ValidatedJson;
use crate::error::AppError;
use crate::state::AppState;

/// Records a payment for an existing order.
///
/// # Endpoint
///
/// `POST /api/payments`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 404 Not Found if the order doesn't exist.
pub async fn create_payment_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePaymentRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let id = state.payment_service.create_payment(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}
