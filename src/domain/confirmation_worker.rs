//! Background delivery of order confirmations.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::order_confirmation::OrderConfirmation;
use crate::infrastructure::messaging::ConfirmationPublisher;

// First retry after ~50ms, doubling each time.
const BACKOFF_BASE_MS: u64 = 2;
const BACKOFF_FACTOR: u64 = 25;
const MAX_DELAY: Duration = Duration::from_secs(2);

/// Drains the confirmation queue and publishes every confirmation.
///
/// Each confirmation gets one attempt plus up to `max_retries` retries with
/// exponential backoff and jitter. A confirmation that still fails is logged
/// and counted, and the worker moves on. Returns when every sender is dropped.
pub async fn run_confirmation_worker(
    mut rx: mpsc::Receiver<OrderConfirmation>,
    publisher: Arc<dyn ConfirmationPublisher>,
    max_retries: usize,
) {
    while let Some(confirmation) = rx.recv().await {
        deliver(&confirmation, publisher.as_ref(), max_retries).await;
    }

    tracing::info!("Confirmation queue closed, worker exiting");
}

/// Publishes a single confirmation with retry. Returns `true` on success.
pub(crate) async fn deliver(
    confirmation: &OrderConfirmation,
    publisher: &dyn ConfirmationPublisher,
    max_retries: usize,
) -> bool {
    let strategy = ExponentialBackoff::from_millis(BACKOFF_BASE_MS)
        .factor(BACKOFF_FACTOR)
        .max_delay(MAX_DELAY)
        .map(jitter)
        .take(max_retries);

    let result = Retry::spawn(strategy, || async {
        publisher.publish(confirmation).await.inspect_err(|e| {
            tracing::warn!(
                order_reference = %confirmation.order_reference,
                error = %e,
                "Confirmation publish attempt failed"
            );
        })
    })
    .await;

    match result {
        Ok(()) => {
            metrics::counter!("order_confirmations_published_total").increment(1);
            tracing::info!(
                order_reference = %confirmation.order_reference,
                "Order confirmation published"
            );
            true
        }
        Err(e) => {
            metrics::counter!("order_confirmations_failed_total").increment(1);
            tracing::error!(
                order_reference = %confirmation.order_reference,
                error = %e,
                retries = max_retries,
                "Giving up on order confirmation"
            );
            false
        }
    }
}
