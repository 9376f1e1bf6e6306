//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for JSON deserialization and validator for input
//! validation; each converts into the domain input it carries.

pub mod created;
pub mod customer;
mod fields;
pub mod health;
pub mod order;
pub mod pagination;
pub mod payment;
pub mod product;
