//! `GET /health`.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse, ServiceStatus};
use crate::state::AppState;

/// Checks the database, the confirmation queue and the publisher.
///
/// Answers `200` when every check passes and `503` otherwise, with the same
/// body either way:
///
/// ```json
/// {
///   "status": "degraded",
///   "version": "0.1.0",
///   "checks": {
///     "database": { "status": "ok", "message": "Connected, 12 orders" },
///     "confirmation_queue": { "status": "error", "message": "Confirmation queue is closed" },
///     "publisher": { "status": "ok", "message": "Publisher reachable" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let checks = HealthChecks {
        database: check_database(&state).await,
        confirmation_queue: check_confirmation_queue(&state),
        publisher: check_publisher(&state).await,
    };
    let all_healthy = checks.all_ok();

    let response = HealthResponse {
        status: if all_healthy {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        },
        version: env!("CARGO_PKG_VERSION"),
        checks,
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_database(state: &AppState) -> CheckStatus {
    match state.order_service.count().await {
        Ok(count) => CheckStatus::ok(format!("Connected, {count} orders")),
        Err(e) => CheckStatus::error(format!("Database error: {e}")),
    }
}

fn check_confirmation_queue(state: &AppState) -> CheckStatus {
    if state.confirmation_sender.is_closed() {
        CheckStatus::error("Confirmation queue is closed")
    } else {
        CheckStatus::ok(format!(
            "Capacity: {}",
            state.confirmation_sender.capacity()
        ))
    }
}

async fn check_publisher(state: &AppState) -> CheckStatus {
    if state.publisher.health_check().await {
        CheckStatus::ok("Publisher reachable")
    } else {
        CheckStatus::error("Publisher unreachable")
    }
}
