//! Root router: `/health` plus the rate-limited `/api` tree, traced, with
//! trailing slashes stripped before routing.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Serve with `into_make_service_with_connect_info::<SocketAddr>()`; the
/// `/api` rate limiter keys on the peer address.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::routes().layer(rate_limit::layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
