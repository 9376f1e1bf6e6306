//! Repository trait for order lines.

use crate::domain::entities::OrderLine;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for order lines.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrderLineRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderLineRepository: Send + Sync {
    /// Persists an order line under `line.order.id`.
    ///
    /// The stored line gets a database-assigned id; `line.id` is not written.
    /// The returned line carries the assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the order or product does not exist.
    async fn create(&self, line: OrderLine) -> Result<OrderLine, AppError>;

    /// Returns every line of an order in insertion order.
    async fn find_all_by_order_id(&self, order_id: i64) -> Result<Vec<OrderLine>, AppError>;
}
