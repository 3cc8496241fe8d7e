//! Application layer: use cases over the customer and order repositories.
//!
//! Services load aggregates, run domain operations, drain the raised events,
//! persist the result and publish the drained events.

pub mod commands;
pub mod customer_service;
pub mod error;
pub mod events;
pub mod order_service;
pub mod queries;

pub use commands::{
    ChangeOrderStatus, ContactChange, CreateCustomer, CreateOrder, DEFAULT_CURRENCY,
    DeactivateCustomer, PhoneParts, UpdateCustomerContact,
};
pub use customer_service::CustomerService;
pub use error::{ApplicationError, Result};
pub use order_service::OrderService;
pub use queries::{GetCustomerOrders, MAX_SEARCH_LIMIT, SearchCustomers};
