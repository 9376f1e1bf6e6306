//! Publisher trait and error types.

use async_trait::async_trait;

use crate::domain::order_confirmation::OrderConfirmation;

/// Errors that can occur while publishing a confirmation.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Publisher connection error: {0}")]
    Connection(String),
    #[error("Failed to encode confirmation: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("Publish failed: {0}")]
    Operation(String),
}

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Sends order confirmations to downstream consumers.
///
/// Implementations must be thread-safe. Retries are the caller's concern
/// (see [`crate::domain::confirmation_worker`]); a single call makes a
/// single delivery attempt.
///
/// # Implementations
///
/// - [`crate::infrastructure::messaging::RedisPublisher`] - Redis `PUBLISH`
/// - [`crate::infrastructure::messaging::NullPublisher`] - logs and drops
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfirmationPublisher: Send + Sync {
    /// Publishes one confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if the payload cannot be encoded or the
    /// channel rejects it.
    async fn publish(&self, confirmation: &OrderConfirmation) -> PublishResult<()>;

    /// Checks if the channel backend is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
