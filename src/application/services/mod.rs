//! Business logic services for the application layer.

pub mod customer_service;
pub mod order_line_service;
pub mod order_service;
pub mod payment_service;
pub mod product_service;

pub use customer_service::CustomerService;
pub use order_line_service::OrderLineService;
pub use order_service::OrderService;
pub use payment_service::PaymentService;
pub use product_service::ProductService;
