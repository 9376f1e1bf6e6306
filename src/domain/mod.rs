//! Domain layer containing business entities and logic.
//!
//! It defines entities, repository interfaces, and domain events independent
//! of infrastructure concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`order_confirmation`] - Confirmation event sent after an order completes
//! - [`confirmation_worker`] - Asynchronous confirmation delivery worker
//!
//! # Confirmation Flow
//!
//! 1. [`crate::application::services::OrderService`] completes an order
//! 2. [`order_confirmation::OrderConfirmation`] is sent to an async channel
//! 3. [`confirmation_worker::run_confirmation_worker`] publishes it with retry logic

pub mod confirmation_worker;
pub mod entities;
pub mod order_confirmation;
pub mod repositories;
