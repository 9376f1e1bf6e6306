//! PostgreSQL implementation of payment repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{NewPayment, Payment};
use crate::domain::repositories::PaymentRepository;
use crate::error::AppError;

pub struct PgPaymentRepository {
    pool: Arc<PgPool>,
}

impl PgPaymentRepository {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct PaymentRow {
    id: i64,
    amount: Decimal,
    order_id: i64,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl PaymentRepository for PgPaymentRepository {
    async fn create(&self, new_payment: NewPayment) -> Result<Payment, AppError> {
        let mut conn = self.pool.acquire().await?;
        insert_payment(&mut conn, new_payment).await
    }
}

pub(crate) async fn insert_payment(
    conn: &mut PgConnection,
    new_payment: NewPayment,
) -> Result<Payment, AppError> {
    let row = sqlx::query_as::<_, PaymentRow>(
        r#"
        INSERT INTO payments (amount, payment_method, order_id)
        VALUES ($1, $2, $3)
        RETURNING id, amount, order_id, created_at
        "#,
    )
    .bind(new_payment.amount)
    .bind(new_payment.payment_method.as_str())
    .bind(new_payment.order_id)
    .fetch_one(conn)
    .await?;

    Ok(Payment {
        id: row.id,
        amount: row.amount,
        payment_method: new_payment.payment_method,
        order_id: row.order_id,
        created_at: row.created_at,
    })
}
