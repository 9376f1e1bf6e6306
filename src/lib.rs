//! Order service: customers, a product catalog, orders and payments over
//! Axum and PostgreSQL.
//!
//! Placing an order checks the customer, reserves stock for every line,
//! stores the order, its lines and its payment, then queues an
//! [`OrderConfirmation`](domain::order_confirmation::OrderConfirmation) that a
//! background worker publishes to Redis.
//!
//! Layers, inner to outer:
//!
//! - [`domain`] entities, the confirmation payload, repository traits
//! - [`application`] assemblers and the services that drive them
//! - [`infrastructure`] PostgreSQL repositories and confirmation publishers
//! - [`api`] handlers, DTOs, middleware
//!
//! [`server::run`] wires them together from a [`config::Config`]; migrations
//! run at startup.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Re-exports for the admin binary and integration tests.
pub mod prelude {
    pub use crate::application::assemblers::{OrderConfirmationAssembler, OrderLineAssembler};
    pub use crate::application::services::{
        CustomerService, OrderLineService, OrderService, PaymentService, ProductService,
    };
    pub use crate::domain::entities::{
        CustomerResponse, OrderLine, OrderLineRequest, OrderLineResponse, PaymentMethod,
        PurchaseResponse,
    };
    pub use crate::domain::order_confirmation::OrderConfirmation;
    pub use crate::error::AppError;
    pub use crate::state::{AppState, Repositories};
}
