//! DTOs for order endpoints.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::fields::{trimmed, validate_money};
use super::product::PurchaseItem;
use crate::domain::entities::{Order, PaymentMethod, PlaceOrder};

/// Request to place an order.
///
/// `amount` is the order total as computed by the client; it is stored and
/// charged as given.
#[derive(Debug, Deserialize, Validate)]
pub struct OrderRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, max = 64, message = "Order reference is required"))]
    pub reference: String,

    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,

    pub payment_method: PaymentMethod,

    #[validate(range(min = 1, message = "Customer should be present"))]
    pub customer_id: i64,

    #[validate(length(min = 1, message = "You should at least purchase one product"))]
    #[validate(nested)]
    pub products: Vec<PurchaseItem>,
}

impl From<OrderRequest> for PlaceOrder {
    fn from(r: OrderRequest) -> Self {
        Self {
            reference: r.reference,
            amount: r.amount,
            payment_method: r.payment_method,
            customer_id: r.customer_id,
            products: r.products.into_iter().map(Into::into).collect(),
        }
    }
}

/// Public view of an order.
#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub id: i64,
    pub reference: String,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub customer_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            reference: o.reference,
            amount: o.total_amount,
            payment_method: o.payment_method,
            customer_id: o.customer_id,
            created_at: o.created_at,
        }
    }
}

fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    validate_money(amount, "amount", "Order amount should be positive")
}
