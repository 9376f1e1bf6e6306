//! Delivery of order confirmations to the notification channel.
//!
//! Provides a [`ConfirmationPublisher`] trait with two implementations:
//! - [`RedisPublisher`] - Redis pub/sub publisher
//! - [`NullPublisher`] - Log-only implementation for deployments without Redis

mod null_publisher;
mod publisher;
mod redis_publisher;

pub use null_publisher::NullPublisher;
pub use publisher::{ConfirmationPublisher, PublishError, PublishResult};
pub use redis_publisher::RedisPublisher;

#[cfg(test)]
pub use publisher::MockConfirmationPublisher;
