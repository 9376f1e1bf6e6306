//! API route configuration.
//!
//! Routes are returned without middleware; [`crate::routes::app_router`]
//! nests them under `/api` and applies rate limiting and tracing.

use crate::api::handlers::{
    create_customer_handler, create_order_handler, create_payment_handler, create_product_handler,
    customer_exists_handler, customer_list_handler, delete_customer_handler, get_customer_handler,
    get_order_handler, get_product_handler, order_lines_handler, order_list_handler,
    product_list_handler, purchase_products_handler, update_customer_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /customers`              - List customers (paginated)
/// - `POST   /customers`              - Register a customer
/// - `GET    /customers/{id}`         - Fetch a customer
/// - `PUT    /customers/{id}`         - Update a customer
/// - `DELETE /customers/{id}`         - Delete a customer
/// - `GET    /customers/exists/{id}`  - Check that a customer exists
/// - `GET    /products`               - List products (paginated)
/// - `POST   /products`               - Add a product
/// - `GET    /products/{id}`          - Fetch a product
/// - `POST   /products/purchase`      - Purchase products
/// - `GET    /orders`                 - List orders (paginated)
/// - `POST   /orders`                 - Place an order
/// - `GET    /orders/{id}`            - Fetch an order
/// - `GET    /orders/{id}/lines`      - List the lines of an order
/// - `POST   /payments`               - Record a payment
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(customer_list_handler).post(create_customer_handler),
        )
        .route(
            "/customers/{id}",
            get(get_customer_handler)
                .put(update_customer_handler)
                .delete(delete_customer_handler),
        )
        .route("/customers/exists/{id}", get(customer_exists_handler))
        .route(
            "/products",
            get(product_list_handler).post(create_product_handler),
        )
        .route("/products/purchase", post(purchase_products_handler))
        .route("/products/{id}", get(get_product_handler))
        .route(
            "/orders",
            get(order_list_handler).post(create_order_handler),
        )
        .route("/orders/{id}", get(get_order_handler))
        .route("/orders/{id}/lines", get(order_lines_handler))
        .route("/payments", post(create_payment_handler))
}
