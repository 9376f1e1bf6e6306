#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::Utc;
use order_service::api::routes::routes;
use order_service::domain::entities::{
    Customer, CustomerPatch, NewCustomer, NewOrder, NewPayment, NewProduct, Order, OrderLine,
    OrderRef, Payment, Product, PurchaseRequest, PurchaseResponse,
};
use order_service::domain::order_confirmation::OrderConfirmation;
use order_service::domain::repositories::{
    CustomerRepository, OrderLineRepository, OrderRepository, OrderTransaction,
    PaymentRepository, ProductRepository, UnitOfWork,
};
use order_service::error::AppError;
use order_service::infrastructure::messaging::NullPublisher;
use order_service::state::{AppState, Repositories};
use rust_decimal::Decimal;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// In-memory stand-in for the PostgreSQL repositories.
///
/// One store implements every repository trait so foreign-key style checks
/// (orders referencing customers, payments referencing orders) behave like
/// the database does.
#[derive(Default)]
pub struct InMemoryStore {
    data: Arc<Mutex<Data>>,
}

#[derive(Default, Clone)]
struct Data {
    next_id: i64,
    customers: Vec<Customer>,
    products: Vec<Product>,
    orders: Vec<Order>,
    order_lines: Vec<OrderLine>,
    payments: Vec<Payment>,
}

impl Data {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn purchase(&mut self, requests: &[PurchaseRequest]) -> Result<Vec<PurchaseResponse>, AppError> {
        let mut stock: HashMap<i64, Product> = self
            .products
            .iter()
            .map(|p| (p.id, p.clone()))
            .collect();

        let missing: Vec<i64> = requests
            .iter()
            .map(|r| r.product_id)
            .filter(|id| !stock.contains_key(id))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::not_found(
                "One or more products do not exist",
                json!({ "product_ids": missing }),
            ));
        }

        let mut purchased = Vec::with_capacity(requests.len());
        for request in requests {
            let Some(product) = stock.get_mut(&request.product_id) else {
                continue;
            };
            if product.available_quantity < request.quantity {
                return Err(AppError::bad_request(
                    "Insufficient stock quantity for product",
                    json!({
                        "product_id": product.id,
                        "available": product.available_quantity,
                        "requested": request.quantity,
                    }),
                ));
            }
            product.available_quantity -= request.quantity;
            purchased.push(PurchaseResponse::of(product, request.quantity));
        }

        // Commit only once every line fits.
        for product in self.products.iter_mut() {
            if let Some(updated) = stock.get(&product.id) {
                product.available_quantity = updated.available_quantity;
            }
        }

        Ok(purchased)
    }

    fn insert_order(&mut self, new_order: NewOrder) -> Result<Order, AppError> {
        if self.orders.iter().any(|o| o.reference == new_order.reference) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "orders_reference_key" }),
            ));
        }
        let id = self.next_id();
        let order = Order::new(
            id,
            new_order.reference,
            new_order.total_amount,
            new_order.payment_method,
            new_order.customer_id,
            Utc::now(),
        );
        self.orders.push(order.clone());
        Ok(order)
    }

    fn insert_order_line(&mut self, line: OrderLine) -> Result<OrderLine, AppError> {
        if !self.orders.iter().any(|o| o.id == line.order.id) {
            return Err(AppError::conflict(
                "Record is still referenced",
                json!({ "constraint": "order_lines_order_id_fkey" }),
            ));
        }
        let id = self.next_id();
        let stored = OrderLine::new(id, line.product_id, OrderRef::new(line.order.id), line.quantity);
        self.order_lines.push(stored.clone());
        Ok(stored)
    }

    fn insert_payment(&mut self, new_payment: NewPayment) -> Result<Payment, AppError> {
        if !self.orders.iter().any(|o| o.id == new_payment.order_id) {
            return Err(AppError::conflict(
                "Record is still referenced",
                json!({ "constraint": "payments_order_id_fkey" }),
            ));
        }
        let id = self.next_id();
        let payment = Payment {
            id,
            amount: new_payment.amount,
            payment_method: new_payment.payment_method,
            order_id: new_payment.order_id,
            created_at: Utc::now(),
        };
        self.payments.push(payment.clone());
        Ok(payment)
    }
}

fn page<T: Clone>(items: &[T], offset: i64, limit: i64) -> Vec<T> {
    items
        .iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect()
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn insert_product(&self, name: &str, available_quantity: i32, price: Decimal) -> i64 {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        data.products.push(Product::new(
            id,
            name.to_string(),
            format!("{name} description"),
            available_quantity,
            price,
        ));
        id
    }

    pub fn insert_customer(&self, firstname: &str, lastname: &str, email: &str) -> i64 {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        data.customers.push(Customer::new(
            id,
            firstname.to_string(),
            lastname.to_string(),
            email.to_string(),
            Utc::now(),
        ));
        id
    }

    pub fn stock_of(&self, product_id: i64) -> Option<i32> {
        let data = self.data.lock().unwrap();
        data.products
            .iter()
            .find(|p| p.id == product_id)
            .map(|p| p.available_quantity)
    }

    pub fn payments(&self) -> Vec<Payment> {
        self.data.lock().unwrap().payments.clone()
    }

    pub fn order_count(&self) -> usize {
        self.data.lock().unwrap().orders.len()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryStore {
    async fn create(&self, new_customer: NewCustomer) -> Result<Customer, AppError> {
        let mut data = self.data.lock().unwrap();
        if data.customers.iter().any(|c| c.email == new_customer.email) {
            return Err(AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": "customers_email_key" }),
            ));
        }
        let id = data.next_id();
        let customer = Customer::new(
            id,
            new_customer.firstname,
            new_customer.lastname,
            new_customer.email,
            Utc::now(),
        );
        data.customers.push(customer.clone());
        Ok(customer)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, AppError> {
        let data = self.data.lock().unwrap();
        Ok(data.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Customer>, AppError> {
        let data = self.data.lock().unwrap();
        Ok(page(&data.customers, offset, limit))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.data.lock().unwrap().customers.len() as i64)
    }

    async fn update(&self, id: i64, patch: CustomerPatch) -> Result<Option<Customer>, AppError> {
        let mut data = self.data.lock().unwrap();
        let Some(customer) = data.customers.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        if let Some(firstname) = patch.firstname {
            customer.firstname = firstname;
        }
        if let Some(lastname) = patch.lastname {
            customer.lastname = lastname;
        }
        if let Some(email) = patch.email {
            customer.email = email;
        }
        Ok(Some(customer.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut data = self.data.lock().unwrap();
        if data.orders.iter().any(|o| o.customer_id == id) {
            return Err(AppError::conflict(
                "Record is still referenced",
                json!({ "constraint": "orders_customer_id_fkey" }),
            ));
        }
        let before = data.customers.len();
        data.customers.retain(|c| c.id != id);
        Ok(data.customers.len() < before)
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let mut data = self.data.lock().unwrap();
        let id = data.next_id();
        let product = Product::new(
            id,
            new_product.name,
            new_product.description,
            new_product.available_quantity,
            new_product.price,
        );
        data.products.push(product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let data = self.data.lock().unwrap();
        Ok(data.products.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError> {
        let data = self.data.lock().unwrap();
        Ok(page(&data.products, offset, limit))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.data.lock().unwrap().products.len() as i64)
    }

    async fn purchase(
        &self,
        requests: Vec<PurchaseRequest>,
    ) -> Result<Vec<PurchaseResponse>, AppError> {
        self.data.lock().unwrap().purchase(&requests)
    }
}

#[async_trait]
impl OrderRepository for InMemoryStore {
    async fn create(&self, new_order: NewOrder) -> Result<Order, AppError> {
        self.data.lock().unwrap().insert_order(new_order)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        let data = self.data.lock().unwrap();
        Ok(data.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Order>, AppError> {
        let data = self.data.lock().unwrap();
        let newest_first: Vec<Order> = data.orders.iter().rev().cloned().collect();
        Ok(page(&newest_first, offset, limit))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.data.lock().unwrap().orders.len() as i64)
    }
}

#[async_trait]
impl OrderLineRepository for InMemoryStore {
    async fn create(&self, line: OrderLine) -> Result<OrderLine, AppError> {
        self.data.lock().unwrap().insert_order_line(line)
    }

    async fn find_all_by_order_id(&self, order_id: i64) -> Result<Vec<OrderLine>, AppError> {
        let data = self.data.lock().unwrap();
        Ok(data
            .order_lines
            .iter()
            .filter(|l| l.order.id == order_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl PaymentRepository for InMemoryStore {
    async fn create(&self, new_payment: NewPayment) -> Result<Payment, AppError> {
        self.data.lock().unwrap().insert_payment(new_payment)
    }
}

/// Stages writes on a copy of the store; commit swaps the copy in.
///
/// Writes made elsewhere between `begin` and `commit` are overwritten, which
/// is fine for tests that place orders one at a time.
struct InMemoryTransaction {
    store: Arc<Mutex<Data>>,
    staged: Option<Data>,
}

impl InMemoryTransaction {
    fn staged(&mut self) -> Result<&mut Data, AppError> {
        self.staged.as_mut().ok_or_else(|| {
            AppError::internal("Order transaction already committed", json!({}))
        })
    }
}

#[async_trait]
impl UnitOfWork for InMemoryStore {
    async fn begin(&self) -> Result<Box<dyn OrderTransaction>, AppError> {
        let snapshot = self.data.lock().unwrap().clone();
        Ok(Box::new(InMemoryTransaction {
            store: self.data.clone(),
            staged: Some(snapshot),
        }))
    }
}

#[async_trait]
impl OrderTransaction for InMemoryTransaction {
    async fn purchase(
        &mut self,
        requests: Vec<PurchaseRequest>,
    ) -> Result<Vec<PurchaseResponse>, AppError> {
        self.staged()?.purchase(&requests)
    }

    async fn create_order(&mut self, new_order: NewOrder) -> Result<Order, AppError> {
        self.staged()?.insert_order(new_order)
    }

    async fn create_order_line(&mut self, line: OrderLine) -> Result<OrderLine, AppError> {
        self.staged()?.insert_order_line(line)
    }

    async fn create_payment(&mut self, new_payment: NewPayment) -> Result<Payment, AppError> {
        self.staged()?.insert_payment(new_payment)
    }

    async fn commit(&mut self) -> Result<(), AppError> {
        let staged = self.staged.take().ok_or_else(|| {
            AppError::internal("Order transaction already committed", json!({}))
        })?;
        *self.store.lock().unwrap() = staged;
        Ok(())
    }
}

/// Builds application state over a fresh in-memory store.
///
/// Returns the receiving end of the confirmation queue so tests can assert
/// on queued confirmations.
pub fn create_test_state(
    store: Arc<InMemoryStore>,
    queue_capacity: usize,
) -> (AppState, mpsc::Receiver<OrderConfirmation>) {
    let (tx, rx) = mpsc::channel(queue_capacity);

    let repositories = Repositories {
        customers: store.clone(),
        products: store.clone(),
        orders: store.clone(),
        order_lines: store.clone(),
        payments: store.clone(),
        unit_of_work: store,
    };

    let state = AppState::new(repositories, Arc::new(NullPublisher::new()), tx);
    (state, rx)
}

/// Test server for the `/api` routes, without rate limiting.
pub fn make_server(state: AppState) -> TestServer {
    let app = axum::Router::new().nest("/api", routes()).with_state(state);
    TestServer::new(app).unwrap()
}
