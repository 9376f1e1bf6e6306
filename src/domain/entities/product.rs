//! Product catalog entity and purchase shapes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product available for purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub available_quantity: i32,
    pub price: Decimal,
}

impl Product {
    pub fn new(
        id: i64,
        name: String,
        description: String,
        available_quantity: i32,
        price: Decimal,
    ) -> Self {
        Self {
            id,
            name,
            description,
            available_quantity,
            price,
        }
    }
}

/// Input data for adding a product to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub available_quantity: i32,
    pub price: Decimal,
}

/// A product id with the quantity to buy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    pub product_id: i64,
    pub quantity: i32,
}

/// Summary of one purchased product.
///
/// `price` is the unit price at purchase time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub product_id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl PurchaseResponse {
    /// Builds the purchase summary for `quantity` units of `product`.
    pub fn of(product: &Product, quantity: i32) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            quantity,
        }
    }
}
