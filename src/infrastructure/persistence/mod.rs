//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`PgCustomerRepository`] - Customers
//! - [`PgProductRepository`] - Product catalog and stock reservation
//! - [`PgOrderRepository`] - Orders
//! - [`PgOrderLineRepository`] - Order lines
//! - [`PgPaymentRepository`] - Payments
//! - [`PgUnitOfWork`] - One transaction per order placement

pub mod pg_customer_repository;
pub mod pg_order_line_repository;
pub mod pg_order_repository;
pub mod pg_payment_repository;
pub mod pg_product_repository;
pub mod pg_unit_of_work;

pub use pg_customer_repository::PgCustomerRepository;
pub use pg_order_line_repository::PgOrderLineRepository;
pub use pg_order_repository::PgOrderRepository;
pub use pg_payment_repository::PgPaymentRepository;
pub use pg_product_repository::PgProductRepository;
pub use pg_unit_of_work::PgUnitOfWork;
