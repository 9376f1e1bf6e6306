//! Application layer: assemblers and services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::CustomerService`] - Customer registration and maintenance
//! - [`services::ProductService`] - Product catalog and stock reservation
//! - [`services::OrderService`] - Order placement workflow
//! - [`services::OrderLineService`] - Order line storage and lookup
//! - [`services::PaymentService`] - Payment recording
//!
//! # Assemblers
//!
//! - [`assemblers::OrderLineAssembler`] - Order line requests to entities to responses
//! - [`assemblers::OrderConfirmationAssembler`] - Confirmation payload aggregation

pub mod assemblers;
pub mod services;
