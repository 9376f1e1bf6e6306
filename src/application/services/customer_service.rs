//! Customer management service.

use std::sync::Arc;

use crate::domain::entities::{CustomerPatch, CustomerResponse, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for registering and maintaining customers.
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Registers a customer and returns its id.
    ///
    /// The email is stored lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    pub async fn create_customer(&self, mut new_customer: NewCustomer) -> Result<i64, AppError> {
        new_customer.email = new_customer.email.trim().to_lowercase();
        let customer = self.repository.create(new_customer).await?;
        tracing::info!(customer_id = customer.id, "Customer created");
        Ok(customer.id)
    }

    /// Updates the non-blank fields of a customer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    pub async fn update_customer(
        &self,
        id: i64,
        patch: CustomerPatch,
    ) -> Result<CustomerResponse, AppError> {
        let mut patch = patch.without_blanks();
        if let Some(email) = patch.email.take() {
            patch.email = Some(email.trim().to_lowercase());
        }

        let updated = if patch.is_empty() {
            self.repository.find_by_id(id).await?
        } else {
            self.repository.update(id, patch).await?
        };

        updated
            .map(CustomerResponse::from)
            .ok_or_else(|| not_found(id))
    }

    /// Returns a page of customers and the total customer count.
    pub async fn find_all(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<CustomerResponse>, i64), AppError> {
        let customers = self.repository.list(offset, limit).await?;
        let total = self.repository.count().await?;

        Ok((
            customers.into_iter().map(CustomerResponse::from).collect(),
            total,
        ))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    pub async fn find_by_id(&self, id: i64) -> Result<CustomerResponse, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .map(CustomerResponse::from)
            .ok_or_else(|| not_found(id))
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.repository.find_by_id(id).await?.is_some())
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    /// Returns [`AppError::Conflict`] if the customer still has orders.
    pub async fn delete_customer(&self, id: i64) -> Result<(), AppError> {
        if self.repository.delete(id).await? {
            tracing::info!(customer_id = id, "Customer deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(
        format!("No customer found with the provided ID: {}", id),
        json!({ "customer_id": id }),
    )
}
