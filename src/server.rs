//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, publisher setup, worker spawning, and Axum server lifecycle.

use crate::config::Config;
use crate::domain::confirmation_worker::run_confirmation_worker;
use crate::infrastructure::messaging::{ConfirmationPublisher, NullPublisher, RedisPublisher};
use crate::infrastructure::persistence::{
    PgCustomerRepository, PgOrderLineRepository, PgOrderRepository, PgPaymentRepository,
    PgProductRepository, PgUnitOfWork,
};
use crate::routes::app_router;
use crate::state::{AppState, Repositories};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Confirmation publisher (Redis or NullPublisher fallback)
/// - Background confirmation worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_database(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    let publisher = connect_publisher(&config).await;

    let (confirmation_tx, confirmation_rx) = mpsc::channel(config.confirmation_queue_capacity);
    let worker = tokio::spawn(run_confirmation_worker(
        confirmation_rx,
        publisher.clone(),
        config.confirmation_max_retries,
    ));
    tracing::info!("Confirmation worker started");

    let pool = Arc::new(pool);
    let repositories = Repositories {
        customers: Arc::new(PgCustomerRepository::new(pool.clone())),
        products: Arc::new(PgProductRepository::new(pool.clone())),
        orders: Arc::new(PgOrderRepository::new(pool.clone())),
        order_lines: Arc::new(PgOrderLineRepository::new(pool.clone())),
        payments: Arc::new(PgPaymentRepository::new(pool.clone())),
        unit_of_work: Arc::new(PgUnitOfWork::new(pool.clone())),
    };

    let state = AppState::new(repositories, publisher, confirmation_tx);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router (and with it every sender) is gone; let the worker flush.
    if let Err(e) = worker.await {
        tracing::error!(error = %e, "Confirmation worker panicked");
    }

    pool.close().await;
    tracing::info!("Server stopped");

    Ok(())
}

async fn connect_database(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

async fn connect_publisher(config: &Config) -> Arc<dyn ConfirmationPublisher> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Confirmation publishing disabled (NullPublisher)");
        return Arc::new(NullPublisher::new());
    };

    match RedisPublisher::connect(redis_url, &config.confirmation_channel).await {
        Ok(redis) => {
            tracing::info!(channel = %redis.channel(), "Publishing confirmations to Redis");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullPublisher.", e);
            Arc::new(NullPublisher::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
