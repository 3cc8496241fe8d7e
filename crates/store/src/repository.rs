use async_trait::async_trait;
use common::{CustomerId, OrderId};
use domain::{Customer, Email, Order};

use crate::{CustomerQuery, Result};

/// Storage for customer aggregates.
///
/// Implementations must be thread-safe (Send + Sync). Callers collect the
/// pending domain events before saving; repositories persist state only.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Returns the customer with this id, or `None`.
    async fn find_by_id(&self, customer_id: CustomerId) -> Result<Option<Customer>>;

    /// Returns the customer with this email, or `None`.
    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>>;

    /// Stores the customer, replacing any customer with the same id.
    ///
    /// Returns the stored customer.
    async fn save(&self, customer: Customer) -> Result<Customer>;

    /// Returns every customer in storage order.
    async fn list_all(&self) -> Result<Vec<Customer>>;

    /// Returns the customers matching the query, paged by its offset and limit.
    async fn search(&self, query: &CustomerQuery) -> Result<Vec<Customer>>;

    /// Returns the number of stored customers.
    async fn count(&self) -> Result<usize> {
        Ok(self.list_all().await?.len())
    }
}

/// Storage for order aggregates.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Returns the order with this id, or `None`.
    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>>;

    /// Returns the orders placed by a customer, in storage order.
    async fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Order>>;

    /// Stores the order, replacing any order with the same id.
    async fn save(&self, order: Order) -> Result<Order>;

    /// Returns every order in storage order.
    async fn list_all(&self) -> Result<Vec<Order>>;
}
