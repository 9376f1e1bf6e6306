//! Order confirmation event handed to the notification channel.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{CustomerResponse, PaymentMethod, PurchaseResponse};

/// Terminal summary of a completed order.
///
/// Built once by [`crate::application::assemblers::OrderConfirmationAssembler`]
/// and passed unmodified to the confirmation queue, then serialized to JSON
/// by a [`crate::infrastructure::messaging::ConfirmationPublisher`].
///
/// # Usage Flow
///
/// 1. Built by the order workflow after payment has been recorded
/// 2. Sent to the confirmation channel (non-blocking)
/// 3. Published by [`crate::domain::confirmation_worker::run_confirmation_worker`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_reference: String,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub customer: CustomerResponse,
    pub products: Vec<PurchaseResponse>,
}
