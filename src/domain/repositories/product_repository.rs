//! Repository trait for the product catalog.

use crate::domain::entities::{NewProduct, Product, PurchaseRequest, PurchaseResponse};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for products and stock.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Atomically reserves stock for every requested product.
    ///
    /// Either all quantities are deducted or none are. The returned purchases
    /// are in the same order as `requests`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if any product does not exist.
    /// Returns [`AppError::Validation`] if any product has insufficient stock.
    /// Returns [`AppError::Internal`] on database errors.
    async fn purchase(
        &self,
        requests: Vec<PurchaseRequest>,
    ) -> Result<Vec<PurchaseResponse>, AppError>;
}
