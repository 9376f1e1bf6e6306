//! Repository trait for payments.

use crate::domain::entities::{NewPayment, Payment};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recorded payments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Records a payment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the order does not exist.
    async fn create(&self, new_payment: NewPayment) -> Result<Payment, AppError>;
}
