//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and confirmation delivery.
//!
//! # Modules
//!
//! - [`messaging`] - Confirmation publishers (Redis and log-only)
//! - [`persistence`] - PostgreSQL repository implementations

pub mod messaging;
pub mod persistence;
