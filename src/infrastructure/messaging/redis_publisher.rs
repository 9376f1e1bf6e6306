//! Redis pub/sub publisher.

use super::publisher::{ConfirmationPublisher, PublishError, PublishResult};
use crate::domain::order_confirmation::OrderConfirmation;
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

/// Publishes confirmations as JSON messages on a Redis channel.
///
/// Uses `ConnectionManager` for automatic reconnection; the manager is cheap
/// to clone per call.
pub struct RedisPublisher {
    connection: ConnectionManager,
    channel: String,
}

impl RedisPublisher {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `channel` - Pub/sub channel confirmations are published to
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, channel: impl Into<String>) -> PublishResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            PublishError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| PublishError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| PublishError::Connection(format!("Redis PING failed: {}", e)))?;

        let channel = channel.into();
        info!(channel = %channel, "Connected to Redis confirmation channel");

        Ok(Self {
            connection: manager,
            channel,
        })
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }
}

#[async_trait]
impl ConfirmationPublisher for RedisPublisher {
    async fn publish(&self, confirmation: &OrderConfirmation) -> PublishResult<()> {
        let payload = serde_json::to_string(confirmation)?;
        let mut conn = self.connection.clone();

        let receivers: i64 = conn
            .publish(&self.channel, payload)
            .await
            .map_err(|e| PublishError::Operation(e.to_string()))?;

        if receivers == 0 {
            warn!(
                channel = %self.channel,
                order_reference = %confirmation.order_reference,
                "Confirmation published with no subscribers"
            );
        } else {
            debug!(
                channel = %self.channel,
                order_reference = %confirmation.order_reference,
                receivers,
                "Confirmation published"
            );
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.connection.clone();
        conn.ping::<()>().await.is_ok()
    }
}
