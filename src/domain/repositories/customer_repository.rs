//! Repository trait for customer data access.

use crate::domain::entities::{Customer, CustomerPatch, NewCustomer};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing customers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCustomerRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Creates a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError>;

    /// Finds a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError>;

    /// Lists customers ordered by id.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Customer>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;

    /// Applies a partial update.
    ///
    /// Returns `Ok(None)` if no customer has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new email is already registered.
    async fn update(&self, id: i64, patch: CustomerPatch) -> Result<Option<Customer>, AppError>;

    /// Deletes a customer.
    ///
    /// Returns `Ok(false)` if no customer has the given id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if orders still reference the customer.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
