//! DTOs for payment endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use super::fields::{trimmed, validate_money};
use crate::domain::entities::{CustomerResponse, PaymentMethod, PaymentRequest};

/// Customer summary attached to a payment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaymentCustomer {
    #[validate(range(min = 1))]
    pub id: i64,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Firstname is required"))]
    pub firstname: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Lastname is required"))]
    pub lastname: String,

    #[validate(email(message = "The customer email is not correctly formatted"))]
    pub email: String,
}

/// Request to record a payment for an existing order.
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePaymentRequest {
    #[validate(custom(function = "validate_amount"))]
    pub amount: Decimal,

    pub payment_method: PaymentMethod,

    #[validate(range(min = 1, message = "Order id is mandatory"))]
    pub order_id: i64,

    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Order reference is mandatory"))]
    pub order_reference: String,

    #[validate(nested)]
    pub customer: PaymentCustomer,
}

impl From<CreatePaymentRequest> for PaymentRequest {
    fn from(r: CreatePaymentRequest) -> Self {
        Self {
            amount: r.amount,
            payment_method: r.payment_method,
            order_id: r.order_id,
            order_reference: r.order_reference,
            customer: CustomerResponse {
                id: r.customer.id,
                firstname: r.customer.firstname,
                lastname: r.customer.lastname,
                email: r.customer.email,
            },
        }
    }
}

fn validate_amount(amount: &Decimal) -> Result<(), ValidationError> {
    validate_money(amount, "amount", "Payment amount must be positive")
}
