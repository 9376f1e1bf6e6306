//! Payment recording service.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::json;

use crate::domain::entities::{NewPayment, PaymentRequest};
use crate::domain::repositories::{OrderTransaction, PaymentRepository};
use crate::error::{AppError, ErrorResponse};

/// Service recording customer payments for orders.
pub struct PaymentService {
    repository: Arc<dyn PaymentRepository>,
}

impl PaymentService {
    pub fn new(repository: Arc<dyn PaymentRepository>) -> Self {
        Self { repository }
    }

    /// Records a payment and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the amount is not positive.
    /// Returns [`AppError::NotFound`] if the order does not exist.
    pub async fn create_payment(&self, request: PaymentRequest) -> Result<i64, AppError> {
        check_amount(&request)?;

        let payment = self
            .repository
            .create(NewPayment::from(&request))
            .await
            .map_err(|e| missing_order(e, request.order_id))?;

        log_payment(payment.id, &request);
        Ok(payment.id)
    }

    /// [`create_payment`](Self::create_payment) inside an order placement.
    pub async fn create_payment_in(
        &self,
        tx: &mut dyn OrderTransaction,
        request: PaymentRequest,
    ) -> Result<i64, AppError> {
        check_amount(&request)?;

        let payment = tx.create_payment(NewPayment::from(&request)).await?;

        log_payment(payment.id, &request);
        Ok(payment.id)
    }
}

fn check_amount(request: &PaymentRequest) -> Result<(), AppError> {
    if request.amount <= Decimal::ZERO {
        return Err(AppError::invalid_fields(
            "Invalid payment",
            ErrorResponse::single("amount", "Payment amount must be positive"),
        ));
    }
    Ok(())
}

/// The payments table references orders; a foreign-key violation on it means
/// the order id names no order.
fn missing_order(err: AppError, order_id: i64) -> AppError {
    match err {
        AppError::Conflict { details, .. }
            if details["constraint"] == "payments_order_id_fkey" =>
        {
            AppError::not_found(
                format!("No order found with the provided ID: {order_id}"),
                json!({ "order_id": order_id }),
            )
        }
        other => other,
    }
}

fn log_payment(payment_id: i64, request: &PaymentRequest) {
    tracing::info!(
        payment_id,
        order_id = request.order_id,
        order_reference = %request.order_reference,
        customer_id = request.customer.id,
        amount = %request.amount,
        payment_method = %request.payment_method,
        "Payment recorded"
    );
}
