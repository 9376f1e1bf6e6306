//! Order line entity and its request/response shapes.

use serde::{Deserialize, Serialize};

use super::order::OrderRef;

/// Request to attach one product/quantity pair to an order.
///
/// Built by the order workflow for every purchased product; never persisted
/// as-is. Quantity is validated upstream before this value is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

impl OrderLineRequest {
    pub fn new(order_id: i64, product_id: i64, quantity: i32) -> Self {
        Self {
            order_id,
            product_id,
            quantity,
        }
    }
}

/// One product/quantity entry within a customer order.
///
/// Instances built by [`crate::application::assemblers::OrderLineAssembler`]
/// are not yet persisted. Their `id` mirrors the owning order's id; the
/// repository assigns the stored line its own identity on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub id: i64,
    pub product_id: i64,
    pub order: OrderRef,
    pub quantity: i32,
}

impl OrderLine {
    pub fn new(id: i64, product_id: i64, order: OrderRef, quantity: i32) -> Self {
        Self {
            id,
            product_id,
            order,
            quantity,
        }
    }
}

/// Public projection of an order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineResponse {
    pub id: i64,
    pub quantity: i32,
}
