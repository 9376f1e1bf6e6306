//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access and are implemented by concrete
//! repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`CustomerRepository`] - Customer CRUD operations
//! - [`ProductRepository`] - Product catalog and stock reservation
//! - [`OrderRepository`] - Orders
//! - [`OrderLineRepository`] - Order lines
//! - [`PaymentRepository`] - Payments
//! - [`UnitOfWork`] - Transactional order placement

pub mod customer_repository;
pub mod order_line_repository;
pub mod order_repository;
pub mod payment_repository;
pub mod product_repository;
pub mod unit_of_work;

pub use customer_repository::CustomerRepository;
pub use order_line_repository::OrderLineRepository;
pub use order_repository::OrderRepository;
pub use payment_repository::PaymentRepository;
pub use product_repository::ProductRepository;
pub use unit_of_work::{OrderTransaction, UnitOfWork};

#[cfg(test)]
pub use customer_repository::MockCustomerRepository;
#[cfg(test)]
pub use order_line_repository::MockOrderLineRepository;
#[cfg(test)]
pub use order_repository::MockOrderRepository;
#[cfg(test)]
pub use payment_repository::MockPaymentRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use unit_of_work::{MockOrderTransaction, MockUnitOfWork};
