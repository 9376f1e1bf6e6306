//! PostgreSQL implementation of customer repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Customer, CustomerPatch, NewCustomer};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;

/// PostgreSQL repository for customers.
pub struct PgCustomerRepository {
    pool: Arc<PgPool>,
}

impl PgCustomerRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CustomerRow {
    id: i64,
    firstname: String,
    lastname: String,
    email: String,
    created_at: DateTime<Utc>,
}

impl From<CustomerRow> for Customer {
    fn from(r: CustomerRow) -> Self {
        Customer::new(r.id, r.firstname, r.lastname, r.email, r.created_at)
    }
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            INSERT INTO customers (firstname, lastname, email)
            VALUES ($1, $2, $3)
            RETURNING id, firstname, lastname, email, created_at
            "#,
        )
        .bind(new_customer.firstname)
        .bind(new_customer.lastname)
        .bind(new_customer.email)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, firstname, lastname, email, created_at FROM customers WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Customer>, AppError> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            r#"
            SELECT id, firstname, lastname, email, created_at
            FROM customers
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(count)
    }

    async fn update(&self, id: i64, patch: CustomerPatch) -> Result<Option<Customer>, AppError> {
        let row = sqlx::query_as::<_, CustomerRow>(
            r#"
            UPDATE customers
            SET firstname = COALESCE($2, firstname),
                lastname  = COALESCE($3, lastname),
                email     = COALESCE($4, email)
            WHERE id = $1
            RETURNING id, firstname, lastname, email, created_at
            "#,
        )
        .bind(id)
        .bind(patch.firstname)
        .bind(patch.lastname)
        .bind(patch.email)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Customer::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
