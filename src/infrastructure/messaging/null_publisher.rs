//! Log-only publisher used when no channel backend is configured.

use super::publisher::{ConfirmationPublisher, PublishResult};
use crate::domain::order_confirmation::OrderConfirmation;
use async_trait::async_trait;
use tracing::{debug, info};

/// A publisher that logs confirmations instead of delivering them.
///
/// # Use Cases
///
/// - Development environments without Redis
/// - Tests that do not inspect delivery
/// - Fallback when Redis connection fails at startup
pub struct NullPublisher;

impl NullPublisher {
    pub fn new() -> Self {
        debug!("Using NullPublisher (confirmation delivery disabled)");
        Self
    }
}

impl Default for NullPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfirmationPublisher for NullPublisher {
    async fn publish(&self, confirmation: &OrderConfirmation) -> PublishResult<()> {
        info!(
            order_reference = %confirmation.order_reference,
            total_amount = %confirmation.total_amount,
            products = confirmation.products.len(),
            "Order confirmation not delivered (no channel configured)"
        );
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
