//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. Creation inputs live next to the
//! entity they produce:
//! - `NewCustomer`, `NewProduct`, `NewOrder`, `NewPayment` - for inserting records
//! - `CustomerPatch` - for partial updates
//! - `OrderLineRequest`, `PlaceOrder`, `PurchaseRequest`, `PaymentRequest` - workflow inputs

pub mod customer;
pub mod order;
pub mod order_line;
pub mod payment;
pub mod product;

pub use customer::{Customer, CustomerPatch, CustomerResponse, NewCustomer};
pub use order::{NewOrder, Order, OrderRef, PaymentMethod, PlaceOrder, UnknownPaymentMethod};
pub use order_line::{OrderLine, OrderLineRequest, OrderLineResponse};
pub use payment::{NewPayment, Payment, PaymentRequest};
pub use product::{NewProduct, Product, PurchaseRequest, PurchaseResponse};
