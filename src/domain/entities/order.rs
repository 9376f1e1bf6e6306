//! Order entity, payment method and order placement input.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::PurchaseRequest;

/// Identifier-only reference to an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderRef {
    pub id: i64,
}

impl OrderRef {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// How a customer pays for an order.
///
/// Serialized as `SCREAMING_SNAKE_CASE` (e.g. `"CREDIT_CARD"`), which is also
/// the representation stored in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Paypal,
    CreditCard,
    Visa,
    MasterCard,
    Bitcoin,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Paypal,
        PaymentMethod::CreditCard,
        PaymentMethod::Visa,
        PaymentMethod::MasterCard,
        PaymentMethod::Bitcoin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Paypal => "PAYPAL",
            PaymentMethod::CreditCard => "CREDIT_CARD",
            PaymentMethod::Visa => "VISA",
            PaymentMethod::MasterCard => "MASTER_CARD",
            PaymentMethod::Bitcoin => "BITCOIN",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown payment method: {0}")]
pub struct UnknownPaymentMethod(pub String);

impl FromStr for PaymentMethod {
    type Err = UnknownPaymentMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownPaymentMethod(s.to_string()))
    }
}

/// A persisted customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: i64,
    pub reference: String,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub customer_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new Order instance.
    pub fn new(
        id: i64,
        reference: String,
        total_amount: Decimal,
        payment_method: PaymentMethod,
        customer_id: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            reference,
            total_amount,
            payment_method,
            customer_id,
            created_at,
        }
    }

    pub fn order_ref(&self) -> OrderRef {
        OrderRef::new(self.id)
    }
}

/// Input data for inserting an order row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub reference: String,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub customer_id: i64,
}

/// Everything the order workflow needs to place an order.
///
/// `amount` is the caller-computed order total; it is carried through to the
/// order, the payment and the confirmation without recomputation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceOrder {
    pub reference: String,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub customer_id: i64,
    pub products: Vec<PurchaseRequest>,
}
