//! Order confirmation aggregation.

use rust_decimal::Decimal;

use crate::domain::entities::{CustomerResponse, PaymentMethod, PurchaseResponse};
use crate::domain::order_confirmation::OrderConfirmation;

/// Combines a completed order's parts into an [`OrderConfirmation`].
///
/// The total is carried as given; the caller is responsible for having
/// summed the line totals.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderConfirmationAssembler;

impl OrderConfirmationAssembler {
    pub fn new() -> Self {
        Self
    }

    /// Builds the confirmation. `products` keeps its order.
    pub fn build_confirmation(
        &self,
        order_reference: impl Into<String>,
        total_amount: Decimal,
        payment_method: PaymentMethod,
        customer: CustomerResponse,
        products: Vec<PurchaseResponse>,
    ) -> OrderConfirmation {
        OrderConfirmation {
            order_reference: order_reference.into(),
            total_amount,
            payment_method,
            customer,
            products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn customer() -> CustomerResponse {
        CustomerResponse {
            id: 1,
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    fn product(id: i64, price: Decimal) -> PurchaseResponse {
        PurchaseResponse {
            product_id: id,
            name: format!("Product {id}"),
            description: String::new(),
            price,
            quantity: 1,
        }
    }

    #[test]
    fn test_build_confirmation_scenario() {
        let assembler = OrderConfirmationAssembler::new();
        let total = Decimal::from_str("59.98").unwrap();

        let confirmation = assembler.build_confirmation(
            "ORD-2024-001",
            total,
            PaymentMethod::CreditCard,
            customer(),
            vec![
                product(42, Decimal::from_str("29.99").unwrap()),
                product(43, Decimal::from_str("29.99").unwrap()),
            ],
        );

        assert_eq!(confirmation.order_reference, "ORD-2024-001");
        assert_eq!(confirmation.total_amount, total);
        assert_eq!(confirmation.total_amount.to_string(), "59.98");
        assert_eq!(confirmation.payment_method, PaymentMethod::CreditCard);
        assert_eq!(confirmation.customer.id, 1);
        assert_eq!(confirmation.products.len(), 2);
        assert_eq!(confirmation.products[0].product_id, 42);
        assert_eq!(confirmation.products[1].product_id, 43);
    }

    #[test]
    fn test_total_is_not_recomputed() {
        let assembler = OrderConfirmationAssembler::new();

        let confirmation = assembler.build_confirmation(
            "ORD-X",
            Decimal::new(1, 2),
            PaymentMethod::Visa,
            customer(),
            vec![product(1, Decimal::new(10000, 2))],
        );

        assert_eq!(confirmation.total_amount, Decimal::new(1, 2));
    }

    #[test]
    fn test_products_keep_order_and_length() {
        let assembler = OrderConfirmationAssembler::new();
        let ids = [9_i64, 3, 7, 3, 1];
        let products: Vec<_> = ids.iter().map(|&id| product(id, Decimal::ONE)).collect();

        let confirmation = assembler.build_confirmation(
            "ORD-Y",
            Decimal::new(5, 0),
            PaymentMethod::Bitcoin,
            customer(),
            products,
        );

        let got: Vec<i64> = confirmation.products.iter().map(|p| p.product_id).collect();
        assert_eq!(got, ids);
    }

    #[test]
    fn test_empty_product_list() {
        let assembler = OrderConfirmationAssembler::new();

        let confirmation = assembler.build_confirmation(
            "ORD-Z",
            Decimal::ZERO,
            PaymentMethod::Paypal,
            customer(),
            vec![],
        );

        assert!(confirmation.products.is_empty());
    }

    #[test]
    fn test_repeated_calls_are_equal() {
        let assembler = OrderConfirmationAssembler::new();
        let build = || {
            assembler.build_confirmation(
                "ORD-1",
                Decimal::new(5998, 2),
                PaymentMethod::MasterCard,
                customer(),
                vec![product(42, Decimal::new(2999, 2))],
            )
        };

        assert_eq!(build(), build());
    }
}
