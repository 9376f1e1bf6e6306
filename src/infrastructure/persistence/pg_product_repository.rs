//! PostgreSQL implementation of product repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::domain::entities::{NewProduct, Product, PurchaseRequest, PurchaseResponse};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// PostgreSQL repository for products and stock.
///
/// Purchases lock the affected rows (`FOR UPDATE`), so concurrent orders
/// cannot oversell. [`purchase_in`] runs the same statements inside an
/// order-placement transaction.
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    available_quantity: i32,
    price: Decimal,
}

impl From<ProductRow> for Product {
    fn from(r: ProductRow) -> Self {
        Product::new(r.id, r.name, r.description, r.available_quantity, r.price)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (name, description, available_quantity, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, available_quantity, price
            "#,
        )
        .bind(new_product.name)
        .bind(new_product.description)
        .bind(new_product.available_quantity)
        .bind(new_product.price)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, available_quantity, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Product::from))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, available_quantity, price
            FROM products
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(count)
    }

    async fn purchase(
        &self,
        requests: Vec<PurchaseRequest>,
    ) -> Result<Vec<PurchaseResponse>, AppError> {
        let mut tx = self.pool.begin().await?;
        let purchased = purchase_in(&mut tx, requests).await?;
        tx.commit().await?;
        Ok(purchased)
    }
}

/// Locks the requested rows and decrements stock on `conn`.
///
/// The caller owns the surrounding transaction; an error leaves the
/// decrements made so far for it to roll back.
pub(crate) async fn purchase_in(
    conn: &mut PgConnection,
    requests: Vec<PurchaseRequest>,
) -> Result<Vec<PurchaseResponse>, AppError> {
    let ids: Vec<i64> = requests.iter().map(|r| r.product_id).collect();

    // Lock in id order to avoid deadlocks between concurrent purchases.
    let rows = sqlx::query_as::<_, ProductRow>(
        r#"
        SELECT id, name, description, available_quantity, price
        FROM products
        WHERE id = ANY($1)
        ORDER BY id
        FOR UPDATE
        "#,
    )
    .bind(&ids)
    .fetch_all(&mut *conn)
    .await?;

    let mut stock: HashMap<i64, Product> =
        rows.into_iter().map(|r| (r.id, Product::from(r))).collect();

    let missing: Vec<i64> = ids
        .iter()
        .copied()
        .filter(|id| !stock.contains_key(id))
        .collect();
    if !missing.is_empty() {
        return Err(AppError::not_found(
            "One or more products do not exist",
            json!({ "product_ids": missing }),
        ));
    }

    let mut purchased = Vec::with_capacity(requests.len());
    for request in &requests {
        let Some(product) = stock.get_mut(&request.product_id) else {
            continue;
        };

        if product.available_quantity < request.quantity {
            return Err(AppError::bad_request(
                "Insufficient stock quantity for product",
                json!({
                    "product_id": product.id,
                    "available": product.available_quantity,
                    "requested": request.quantity,
                }),
            ));
        }

        sqlx::query("UPDATE products SET available_quantity = available_quantity - $2 WHERE id = $1")
            .bind(product.id)
            .bind(request.quantity)
            .execute(&mut *conn)
            .await?;

        product.available_quantity -= request.quantity;
        purchased.push(PurchaseResponse::of(product, request.quantity));
    }

    Ok(purchased)
}
