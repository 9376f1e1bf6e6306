//! Repository trait for orders.

use crate::domain::entities::{NewOrder, Order};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for orders.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgOrderRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Creates a new order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the reference is already used or the
    /// customer no longer exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError>;

    /// Lists orders, newest first.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Order>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
