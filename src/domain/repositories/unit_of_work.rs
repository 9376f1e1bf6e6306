//! Transactional writes for order placement.

use crate::domain::entities::{
    NewOrder, NewPayment, Order, OrderLine, Payment, PurchaseRequest, PurchaseResponse,
};
use crate::error::AppError;
use async_trait::async_trait;

/// Opens [`OrderTransaction`]s.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn OrderTransaction>, AppError>;
}

/// Stock reservation, order, lines and payment written as one unit.
///
/// Nothing is visible to other readers until [`commit`](Self::commit)
/// succeeds. Dropping the transaction uncommitted discards every write,
/// including stock decrements.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderTransaction: Send {
    /// Same contract as [`ProductRepository::purchase`](super::ProductRepository::purchase).
    async fn purchase(
        &mut self,
        requests: Vec<PurchaseRequest>,
    ) -> Result<Vec<PurchaseResponse>, AppError>;

    async fn create_order(&mut self, new_order: NewOrder) -> Result<Order, AppError>;

    async fn create_order_line(&mut self, line: OrderLine) -> Result<OrderLine, AppError>;

    async fn create_payment(&mut self, new_payment: NewPayment) -> Result<Payment, AppError>;

    /// Fails with [`AppError::Internal`] if called twice.
    async fn commit(&mut self) -> Result<(), AppError>;
}
