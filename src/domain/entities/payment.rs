//! Payment entity and payment request.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::customer::CustomerResponse;
use super::order::PaymentMethod;

/// A recorded payment for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    pub id: i64,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub order_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Input data for inserting a payment row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPayment {
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub order_id: i64,
}

/// Request to charge a customer for an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub order_id: i64,
    pub order_reference: String,
    pub customer: CustomerResponse,
}

impl From<&PaymentRequest> for NewPayment {
    fn from(request: &PaymentRequest) -> Self {
        Self {
            amount: request.amount,
            payment_method: request.payment_method,
            order_id: request.order_id,
        }
    }
}
