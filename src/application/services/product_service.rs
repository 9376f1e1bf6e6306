//! Product catalog and purchasing service.

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, PurchaseRequest, PurchaseResponse};
use crate::domain::repositories::{OrderTransaction, ProductRepository};
use crate::error::{AppError, ErrorResponse};
use serde_json::json;

/// Service for the product catalog and stock reservation.
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    /// Adds a product and returns its id.
    pub async fn create_product(&self, new_product: NewProduct) -> Result<i64, AppError> {
        let product = self.repository.create(new_product).await?;
        tracing::info!(product_id = product.id, "Product created");
        Ok(product.id)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist.
    pub async fn find_by_id(&self, id: i64) -> Result<Product, AppError> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                format!("No product found with the provided ID: {}", id),
                json!({ "product_id": id }),
            )
        })
    }

    /// Returns a page of products and the total product count.
    pub async fn find_all(&self, offset: i64, limit: i64) -> Result<(Vec<Product>, i64), AppError> {
        let products = self.repository.list(offset, limit).await?;
        let total = self.repository.count().await?;
        Ok((products, total))
    }

    /// Reserves stock for every request, all or nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty list, a repeated product
    /// or insufficient stock, and [`AppError::NotFound`] for unknown products.
    pub async fn purchase_products(
        &self,
        requests: Vec<PurchaseRequest>,
    ) -> Result<Vec<PurchaseResponse>, AppError> {
        check_purchase(&requests)?;

        let purchased = self.repository.purchase(requests).await?;
        tracing::debug!(items = purchased.len(), "Products purchased");
        Ok(purchased)
    }

    /// [`purchase_products`](Self::purchase_products) inside an order
    /// placement; the decrements roll back with `tx`.
    pub async fn purchase_products_in(
        &self,
        tx: &mut dyn OrderTransaction,
        requests: Vec<PurchaseRequest>,
    ) -> Result<Vec<PurchaseResponse>, AppError> {
        check_purchase(&requests)?;
        tx.purchase(requests).await
    }
}

fn check_purchase(requests: &[PurchaseRequest]) -> Result<(), AppError> {
    if requests.is_empty() {
        return Err(AppError::invalid_fields(
            "Nothing to purchase",
            ErrorResponse::single("products", "At least one product is required"),
        ));
    }

    let mut seen = HashSet::with_capacity(requests.len());
    if let Some(duplicate) = requests.iter().find(|r| !seen.insert(r.product_id)) {
        return Err(AppError::invalid_fields(
            "Duplicate product in purchase",
            ErrorResponse::single(
                "products",
                format!("Product {} is listed more than once", duplicate.product_id),
            ),
        ));
    }

    Ok(())
}
