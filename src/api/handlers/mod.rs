//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod customers;
pub mod health;
pub mod orders;
pub mod payments;
pub mod products;

pub use customers::{
    create_customer_handler, customer_exists_handler, customer_list_handler,
    delete_customer_handler, get_customer_handler, update_customer_handler,
};
pub use health::health_handler;
pub use orders::{
    create_order_handler, get_order_handler, order_lines_handler, order_list_handler,
};
pub use payments::create_payment_handler;
pub use products::{
    create_product_handler, get_product_handler, product_list_handler, purchase_products_handler,
};
