//! Order placement workflow and order lookup.

use std::sync::Arc;

use serde_json::json;
use tokio::sync::mpsc::{self, error::TrySendError};

use crate::application::assemblers::OrderConfirmationAssembler;
use crate::application::services::{
    CustomerService, OrderLineService, PaymentService, ProductService,
};
use crate::domain::entities::{
    CustomerResponse, NewOrder, Order, OrderLineRequest, PaymentRequest, PlaceOrder,
    PurchaseResponse,
};
use crate::domain::order_confirmation::OrderConfirmation;
use crate::domain::repositories::{OrderRepository, OrderTransaction, UnitOfWork};
use crate::error::AppError;

/// Service orchestrating order creation.
///
/// Placing an order touches every other service: the customer is resolved,
/// stock is reserved, the order and its lines are stored, the payment is
/// recorded, and a confirmation is queued for delivery. The writes share one
/// transaction from [`UnitOfWork`].
pub struct OrderService {
    order_repository: Arc<dyn OrderRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
    customer_service: Arc<CustomerService>,
    product_service: Arc<ProductService>,
    order_line_service: Arc<OrderLineService>,
    payment_service: Arc<PaymentService>,
    confirmation_assembler: OrderConfirmationAssembler,
    confirmation_sender: mpsc::Sender<OrderConfirmation>,
}

impl OrderService {
    pub fn new(
        order_repository: Arc<dyn OrderRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
        customer_service: Arc<CustomerService>,
        product_service: Arc<ProductService>,
        order_line_service: Arc<OrderLineService>,
        payment_service: Arc<PaymentService>,
        confirmation_sender: mpsc::Sender<OrderConfirmation>,
    ) -> Self {
        Self {
            order_repository,
            unit_of_work,
            customer_service,
            product_service,
            order_line_service,
            payment_service,
            confirmation_assembler: OrderConfirmationAssembler::new(),
            confirmation_sender,
        }
    }

    /// Places an order and returns its id.
    ///
    /// # Flow
    ///
    /// 1. Resolve the customer
    /// 2. Reserve stock for every product
    /// 3. Store the order
    /// 4. Store one line per requested product
    /// 5. Record the payment
    /// 6. Queue the confirmation (never fails the order)
    ///
    /// Steps 2 to 5 commit together. If any of them fails nothing is kept,
    /// so stock taken in step 2 is back on the shelf.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer or a product does not exist.
    /// Returns [`AppError::Validation`] if stock is insufficient or the product list is invalid.
    /// Returns [`AppError::Conflict`] if the reference is already used.
    pub async fn create_order(&self, request: PlaceOrder) -> Result<i64, AppError> {
        let customer = self.resolve_customer(request.customer_id).await?;

        let mut tx = self.unit_of_work.begin().await?;
        let (order, purchased) = self
            .write_order(&mut *tx, &request, &customer)
            .await?;
        tx.commit().await?;

        let confirmation = self.confirmation_assembler.build_confirmation(
            order.reference,
            request.amount,
            request.payment_method,
            customer,
            purchased,
        );
        self.enqueue_confirmation(confirmation);

        tracing::info!(order_id = order.id, "Order placed");
        Ok(order.id)
    }

    async fn write_order(
        &self,
        tx: &mut dyn OrderTransaction,
        request: &PlaceOrder,
        customer: &CustomerResponse,
    ) -> Result<(Order, Vec<PurchaseResponse>), AppError> {
        let purchased = self
            .product_service
            .purchase_products_in(tx, request.products.clone())
            .await?;

        let order = tx
            .create_order(NewOrder {
                reference: request.reference.clone(),
                total_amount: request.amount,
                payment_method: request.payment_method,
                customer_id: customer.id,
            })
            .await?;

        for product in &request.products {
            self.order_line_service
                .save_order_line_in(
                    tx,
                    OrderLineRequest::new(order.id, product.product_id, product.quantity),
                )
                .await?;
        }

        self.payment_service
            .create_payment_in(
                tx,
                PaymentRequest {
                    amount: request.amount,
                    payment_method: request.payment_method,
                    order_id: order.id,
                    order_reference: order.reference.clone(),
                    customer: customer.clone(),
                },
            )
            .await?;

        Ok((order, purchased))
    }

    /// Returns a page of orders and the total order count.
    pub async fn find_all(&self, offset: i64, limit: i64) -> Result<(Vec<Order>, i64), AppError> {
        let orders = self.order_repository.list(offset, limit).await?;
        let total = self.order_repository.count().await?;
        Ok((orders, total))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the order does not exist.
    pub async fn find_by_id(&self, id: i64) -> Result<Order, AppError> {
        self.order_repository.find_by_id(id).await?.ok_or_else(|| {
            AppError::not_found(
                format!("No order found with the provided ID: {}", id),
                json!({ "order_id": id }),
            )
        })
    }

    /// Counts stored orders. Used as the database health check.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.order_repository.count().await
    }

    async fn resolve_customer(&self, customer_id: i64) -> Result<CustomerResponse, AppError> {
        match self.customer_service.find_by_id(customer_id).await {
            Err(AppError::NotFound { details, .. }) => Err(AppError::not_found(
                "Cannot create order: no customer exists with the provided ID",
                details,
            )),
            other => other,
        }
    }

    fn enqueue_confirmation(&self, confirmation: OrderConfirmation) {
        match self.confirmation_sender.try_send(confirmation) {
            Ok(()) => {}
            Err(TrySendError::Full(c)) => {
                metrics::counter!("order_confirmations_dropped_total").increment(1);
                tracing::warn!(
                    order_reference = %c.order_reference,
                    "Confirmation queue full, confirmation dropped"
                );
            }
            Err(TrySendError::Closed(c)) => {
                metrics::counter!("order_confirmations_dropped_total").increment(1);
                tracing::error!(
                    order_reference = %c.order_reference,
                    "Confirmation queue closed, confirmation dropped"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::assemblers::OrderLineAssembler;
    use crate::domain::entities::{Customer, OrderLine, Payment, PaymentMethod, PurchaseRequest};
    use crate::domain::repositories::{
        MockCustomerRepository, MockOrderLineRepository, MockOrderRepository,
        MockOrderTransaction, MockPaymentRepository, MockProductRepository, MockUnitOfWork,
    };
    use chrono::Utc;
    use rust_decimal::Decimal;

    struct Mocks {
        orders: MockOrderRepository,
        customers: MockCustomerRepository,
        tx: MockOrderTransaction,
        begins: usize,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                orders: MockOrderRepository::new(),
                customers: MockCustomerRepository::new(),
                tx: MockOrderTransaction::new(),
                begins: 1,
            }
        }

        fn into_service(self, capacity: usize) -> (OrderService, mpsc::Receiver<OrderConfirmation>) {
            let mut unit_of_work = MockUnitOfWork::new();
            let tx = self.tx;
            if self.begins == 0 {
                unit_of_work.expect_begin().times(0);
            } else {
                unit_of_work
                    .expect_begin()
                    .times(1)
                    .return_once(move || Ok(Box::new(tx) as Box<dyn OrderTransaction>));
            }

            let (sender, rx) = mpsc::channel(capacity);
            let service = OrderService::new(
                Arc::new(self.orders),
                Arc::new(unit_of_work),
                Arc::new(CustomerService::new(Arc::new(self.customers))),
                Arc::new(ProductService::new(Arc::new(MockProductRepository::new()))),
                Arc::new(OrderLineService::new(
                    Arc::new(MockOrderLineRepository::new()),
                    OrderLineAssembler::new(),
                )),
                Arc::new(PaymentService::new(Arc::new(MockPaymentRepository::new()))),
                sender,
            );
            (service, rx)
        }
    }

    fn place_order() -> PlaceOrder {
        PlaceOrder {
            reference: "ORD-2024-001".to_string(),
            amount: Decimal::new(5998, 2),
            payment_method: PaymentMethod::CreditCard,
            customer_id: 1,
            products: vec![
                PurchaseRequest {
                    product_id: 42,
                    quantity: 1,
                },
                PurchaseRequest {
                    product_id: 43,
                    quantity: 1,
                },
            ],
        }
    }

    fn customer() -> Customer {
        Customer::new(
            1,
            "Ada".to_string(),
            "Lovelace".to_string(),
            "ada@example.com".to_string(),
            Utc::now(),
        )
    }

    fn purchased(reqs: Vec<PurchaseRequest>) -> Vec<PurchaseResponse> {
        reqs.into_iter()
            .map(|r| PurchaseResponse {
                product_id: r.product_id,
                name: format!("Product {}", r.product_id),
                description: String::new(),
                price: Decimal::new(2999, 2),
                quantity: r.quantity,
            })
            .collect()
    }

    fn stored_order(o: NewOrder) -> Order {
        Order::new(
            7,
            o.reference,
            o.total_amount,
            o.payment_method,
            o.customer_id,
            Utc::now(),
        )
    }

    fn expect_customer(mocks: &mut Mocks) {
        mocks
            .customers
            .expect_find_by_id()
            .returning(|_| Ok(Some(customer())));
    }

    fn expect_happy_path(mocks: &mut Mocks) {
        expect_customer(mocks);
        let tx = &mut mocks.tx;
        tx.expect_purchase()
            .times(1)
            .returning(|reqs| Ok(purchased(reqs)));
        tx.expect_create_order()
            .times(1)
            .returning(|o| Ok(stored_order(o)));
        tx.expect_create_order_line()
            .withf(|line| line.order.id == 7 && line.id == 7)
            .times(2)
            .returning(|line| Ok(OrderLine { id: 100 + line.product_id, ..line }));
        tx.expect_create_payment()
            .withf(|p| p.order_id == 7 && p.amount == Decimal::new(5998, 2))
            .times(1)
            .returning(|p| {
                Ok(Payment {
                    id: 1,
                    amount: p.amount,
                    payment_method: p.payment_method,
                    order_id: p.order_id,
                    created_at: Utc::now(),
                })
            });
        tx.expect_commit().times(1).returning(|| Ok(()));
    }

    #[tokio::test]
    async fn test_create_order_happy_path_queues_confirmation() {
        let mut mocks = Mocks::new();
        expect_happy_path(&mut mocks);
        let (service, mut rx) = mocks.into_service(4);

        let order_id = service.create_order(place_order()).await.unwrap();
        assert_eq!(order_id, 7);

        let confirmation = rx.try_recv().unwrap();
        assert_eq!(confirmation.order_reference, "ORD-2024-001");
        assert_eq!(confirmation.total_amount.to_string(), "59.98");
        assert_eq!(confirmation.payment_method, PaymentMethod::CreditCard);
        assert_eq!(confirmation.customer.email, "ada@example.com");
        let ids: Vec<i64> = confirmation.products.iter().map(|p| p.product_id).collect();
        assert_eq!(ids, vec![42, 43]);
    }

    #[tokio::test]
    async fn test_create_order_unknown_customer() {
        let mut mocks = Mocks::new();
        mocks.customers.expect_find_by_id().returning(|_| Ok(None));
        mocks.begins = 0;
        let (service, mut rx) = mocks.into_service(4);

        let err = service.create_order(place_order()).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
        assert!(err.to_string().starts_with("Cannot create order"));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_create_order_stops_when_purchase_fails() {
        let mut mocks = Mocks::new();
        expect_customer(&mut mocks);
        mocks.tx.expect_purchase().returning(|_| {
            Err(AppError::bad_request(
                "Insufficient stock",
                json!({ "product_id": 42 }),
            ))
        });
        mocks.tx.expect_create_order().times(0);
        mocks.tx.expect_create_payment().times(0);
        mocks.tx.expect_commit().times(0);
        let (service, _rx) = mocks.into_service(4);

        assert!(matches!(
            service.create_order(place_order()).await,
            Err(AppError::Validation { .. })
        ));
    }

    #[tokio::test]
    async fn test_duplicate_reference_is_not_committed() {
        let mut mocks = Mocks::new();
        expect_customer(&mut mocks);
        mocks
            .tx
            .expect_purchase()
            .times(1)
            .returning(|reqs| Ok(purchased(reqs)));
        mocks.tx.expect_create_order().returning(|_| {
            Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "orders_reference_key" }),
            ))
        });
        mocks.tx.expect_create_order_line().times(0);
        mocks.tx.expect_commit().times(0);
        let (service, mut rx) = mocks.into_service(4);

        assert!(matches!(
            service.create_order(place_order()).await,
            Err(AppError::Conflict { .. })
        ));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_failed_commit_queues_nothing() {
        let mut mocks = Mocks::new();
        expect_customer(&mut mocks);
        mocks
            .tx
            .expect_purchase()
            .returning(|reqs| Ok(purchased(reqs)));
        mocks
            .tx
            .expect_create_order()
            .returning(|o| Ok(stored_order(o)));
        mocks
            .tx
            .expect_create_order_line()
            .returning(|line| Ok(line));
        mocks.tx.expect_create_payment().returning(|p| {
            Ok(Payment {
                id: 1,
                amount: p.amount,
                payment_method: p.payment_method,
                order_id: p.order_id,
                created_at: Utc::now(),
            })
        });
        mocks.tx.expect_commit().returning(|| {
            Err(AppError::internal(
                "Database error",
                json!({ "reason": "connection reset" }),
            ))
        });
        let (service, mut rx) = mocks.into_service(4);

        assert!(matches!(
            service.create_order(place_order()).await,
            Err(AppError::Internal { .. })
        ));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_full_queue_does_not_fail_order() {
        let mut mocks = Mocks::new();
        expect_happy_path(&mut mocks);
        let (service, mut rx) = mocks.into_service(1);

        // Occupy the only slot.
        service
            .confirmation_sender
            .try_send(OrderConfirmation {
                order_reference: "filler".to_string(),
                total_amount: Decimal::ZERO,
                payment_method: PaymentMethod::Paypal,
                customer: customer().into(),
                products: vec![],
            })
            .unwrap();

        assert_eq!(service.create_order(place_order()).await.unwrap(), 7);
        assert_eq!(rx.try_recv().unwrap().order_reference, "filler");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let mut mocks = Mocks::new();
        mocks.orders.expect_find_by_id().returning(|_| Ok(None));
        mocks.begins = 0;
        let (service, _rx) = mocks.into_service(1);

        let err = service.find_by_id(3).await.unwrap_err();
        assert_eq!(err.to_string(), "No order found with the provided ID: 3");
    }
}
