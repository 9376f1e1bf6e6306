//! PostgreSQL implementation of order repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::{FromRow, PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewOrder, Order, PaymentMethod};
use crate::domain::repositories::OrderRepository;
use crate::error::AppError;

/// PostgreSQL repository for orders.
pub struct PgOrderRepository {
    pool: Arc<PgPool>,
}

impl PgOrderRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct OrderRow {
    id: i64,
    reference: String,
    total_amount: Decimal,
    payment_method: String,
    customer_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = AppError;

    fn try_from(r: OrderRow) -> Result<Self, Self::Error> {
        let payment_method: PaymentMethod = r.payment_method.parse().map_err(|e| {
            AppError::internal(
                "Corrupt order row",
                json!({ "order_id": r.id, "reason": format!("{e}") }),
            )
        })?;

        Ok(Order::new(
            r.id,
            r.reference,
            r.total_amount,
            payment_method,
            r.customer_id,
            r.created_at,
        ))
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        let mut conn = self.pool.acquire().await?;
        insert_order(&mut conn, new_order).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, reference, total_amount, payment_method, customer_id, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Order::try_from).transpose()
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Order>, AppError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, reference, total_amount, payment_method, customer_id, created_at
            FROM orders
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Order::try_from).collect()
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(count)
    }
}

/// Inserts an order on `conn`. A reused reference is a unique violation,
/// surfaced as [`AppError::Conflict`].
pub(crate) async fn insert_order(
    conn: &mut PgConnection,
    new_order: NewOrder,
) -> Result<Order, AppError> {
    let row = sqlx::query_as::<_, OrderRow>(
        r#"
        INSERT INTO orders (reference, total_amount, payment_method, customer_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, reference, total_amount, payment_method, customer_id, created_at
        "#,
    )
    .bind(new_order.reference)
    .bind(new_order.total_amount)
    .bind(new_order.payment_method.as_str())
    .bind(new_order.customer_id)
    .fetch_one(conn)
    .await?;

    row.try_into()
}
