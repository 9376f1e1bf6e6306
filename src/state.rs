//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::assemblers::OrderLineAssembler;
use crate::application::services::{
    CustomerService, OrderLineService, OrderService, PaymentService, ProductService,
};
use crate::domain::order_confirmation::OrderConfirmation;
use crate::domain::repositories::{
    CustomerRepository, OrderLineRepository, OrderRepository, PaymentRepository,
    ProductRepository, UnitOfWork,
};
use crate::infrastructure::messaging::ConfirmationPublisher;

/// Repository implementations the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub customers: Arc<dyn CustomerRepository>,
    pub products: Arc<dyn ProductRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub order_lines: Arc<dyn OrderLineRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    /// Transactions for order placement.
    pub unit_of_work: Arc<dyn UnitOfWork>,
}

#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService>,
    pub product_service: Arc<ProductService>,
    pub order_service: Arc<OrderService>,
    pub order_line_service: Arc<OrderLineService>,
    pub payment_service: Arc<PaymentService>,
    pub publisher: Arc<dyn ConfirmationPublisher>,
    pub confirmation_sender: mpsc::Sender<OrderConfirmation>,
}

impl AppState {
    /// Wires the services together.
    ///
    /// Confirmations queued by the order service are sent on
    /// `confirmation_sender`; the caller owns the receiving end.
    pub fn new(
        repositories: Repositories,
        publisher: Arc<dyn ConfirmationPublisher>,
        confirmation_sender: mpsc::Sender<OrderConfirmation>,
    ) -> Self {
        let customer_service = Arc::new(CustomerService::new(repositories.customers));
        let product_service = Arc::new(ProductService::new(repositories.products));
        let order_line_service = Arc::new(OrderLineService::new(
            repositories.order_lines,
            OrderLineAssembler::new(),
        ));
        let payment_service = Arc::new(PaymentService::new(repositories.payments));

        let order_service = Arc::new(OrderService::new(
            repositories.orders,
            repositories.unit_of_work,
            customer_service.clone(),
            product_service.clone(),
            order_line_service.clone(),
            payment_service.clone(),
            confirmation_sender.clone(),
        ));

        Self {
            customer_service,
            product_service,
            order_service,
            order_line_service,
            payment_service,
            publisher,
            confirmation_sender,
        }
    }
}
