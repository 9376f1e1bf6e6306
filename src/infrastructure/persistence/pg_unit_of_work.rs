//! PostgreSQL transaction for order placement.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

use super::pg_order_line_repository::insert_order_line;
use super::pg_order_repository::insert_order;
use super::pg_payment_repository::insert_payment;
use super::pg_product_repository::purchase_in;
use crate::domain::entities::{
    NewOrder, NewPayment, Order, OrderLine, Payment, PurchaseRequest, PurchaseResponse,
};
use crate::domain::repositories::{OrderTransaction, UnitOfWork};
use crate::error::AppError;

pub struct PgUnitOfWork {
    pool: Arc<PgPool>,
}

impl PgUnitOfWork {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    async fn begin(&self) -> Result<Box<dyn OrderTransaction>, AppError> {
        let tx = self.pool.begin().await?;
        Ok(Box::new(PgOrderTransaction { tx: Some(tx) }))
    }
}

/// Wraps a `sqlx` transaction; sqlx rolls it back when dropped uncommitted.
pub struct PgOrderTransaction {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgOrderTransaction {
    fn tx(&mut self) -> Result<&mut Transaction<'static, Postgres>, AppError> {
        self.tx.as_mut().ok_or_else(finished)
    }
}

fn finished() -> AppError {
    AppError::internal(
        "Order transaction already committed",
        json!({ "reason": "transaction_finished" }),
    )
}

#[async_trait]
impl OrderTransaction for PgOrderTransaction {
    async fn purchase(
        &mut self,
        requests: Vec<PurchaseRequest>,
    ) -> Result<Vec<PurchaseResponse>, AppError> {
        purchase_in(self.tx()?, requests).await
    }

    async fn create_order(&mut self, new_order: NewOrder) -> Result<Order, AppError> {
        insert_order(self.tx()?, new_order).await
    }

    async fn create_order_line(&mut self, line: OrderLine) -> Result<OrderLine, AppError> {
        insert_order_line(self.tx()?, line).await
    }

    async fn create_payment(&mut self, new_payment: NewPayment) -> Result<Payment, AppError> {
        insert_payment(self.tx()?, new_payment).await
    }

    async fn commit(&mut self) -> Result<(), AppError> {
        let tx = self.tx.take().ok_or_else(finished)?;
        tx.commit().await?;
        Ok(())
    }
}
