//! HTTP surface under `/api`: request DTOs and their validation, handlers
//! that call into the application services, and the route table.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
