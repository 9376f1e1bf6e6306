//! PostgreSQL implementation of order line repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{OrderLine, OrderRef};
use crate::domain::repositories::OrderLineRepository;
use crate::error::AppError;

/// PostgreSQL repository for order lines.
///
/// Line ids come from the `order_lines.id` identity column; the in-memory id
/// of a line being created is ignored.
pub struct PgOrderLineRepository {
    pool: Arc<PgPool>,
}

impl PgOrderLineRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct OrderLineRow {
    id: i64,
    order_id: i64,
    product_id: i64,
    quantity: i32,
}

impl From<OrderLineRow> for OrderLine {
    fn from(r: OrderLineRow) -> Self {
        OrderLine::new(r.id, r.product_id, OrderRef::new(r.order_id), r.quantity)
    }
}

#[async_trait]
impl OrderLineRepository for PgOrderLineRepository {
    async fn create(&self, line: OrderLine) -> Result<OrderLine, AppError> {
        let mut conn = self.pool.acquire().await?;
        insert_order_line(&mut conn, line).await
    }

    async fn find_all_by_order_id(&self, order_id: i64) -> Result<Vec<OrderLine>, AppError> {
        let rows = sqlx::query_as::<_, OrderLineRow>(
            r#"
            SELECT id, order_id, product_id, quantity
            FROM order_lines
            WHERE order_id = $1
            ORDER BY id
            "#,
        )
        .bind(order_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(OrderLine::from).collect())
    }
}

pub(crate) async fn insert_order_line(
    conn: &mut PgConnection,
    line: OrderLine,
) -> Result<OrderLine, AppError> {
    let row = sqlx::query_as::<_, OrderLineRow>(
        r#"
        INSERT INTO order_lines (order_id, product_id, quantity)
        VALUES ($1, $2, $3)
        RETURNING id, order_id, product_id, quantity
        "#,
    )
    .bind(line.order.id)
    .bind(line.product_id)
    .bind(line.quantity)
    .fetch_one(conn)
    .await?;

    Ok(row.into())
}
