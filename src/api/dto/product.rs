//! DTOs for product endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::fields::{trimmed, validate_money};

use crate::domain::entities::{NewProduct, PurchaseRequest};

/// Request to add a product to the catalog.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 200, message = "Product name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 2000))]
    pub description: String,

    #[validate(range(min = 0, message = "Available quantity cannot be negative"))]
    pub available_quantity: i32,

    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(r: CreateProductRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            available_quantity: r.available_quantity,
            price: r.price,
        }
    }
}

/// One item of a purchase or order request.
///
/// `Serialize` lets `length` checks on `Vec<PurchaseItem>` report the value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct PurchaseItem {
    #[validate(range(min = 1, message = "Product id is mandatory"))]
    pub product_id: i64,

    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity: i32,
}

impl From<PurchaseItem> for PurchaseRequest {
    fn from(item: PurchaseItem) -> Self {
        Self {
            product_id: item.product_id,
            quantity: item.quantity,
        }
    }
}

/// Stand-alone purchase of catalog products.
#[derive(Debug, Deserialize, Validate)]
pub struct PurchaseProductsRequest {
    #[validate(length(min = 1, message = "At least one product is required"))]
    #[validate(nested)]
    pub products: Vec<PurchaseItem>,
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    validate_money(price, "price", "Price must be positive")
}
