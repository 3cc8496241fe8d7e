use std::sync::Arc;

use async_trait::async_trait;
use common::{CustomerId, OrderId};
use domain::{Customer, Email, Entity, Order};
use tokio::sync::RwLock;

use crate::{CustomerQuery, CustomerRepository, OrderRepository, RepositoryError, Result};

/// Replaces the item with the same id, or appends. A replaced item moves to
/// the end so storage order reflects the latest save.
fn upsert<T: Entity>(items: &mut Vec<T>, item: T) {
    let id = item.id();
    items.retain(|existing| existing.id() != id);
    items.push(item);
}

fn record_size(aggregate: &'static str, len: usize) {
    metrics::gauge!("repository_size", "aggregate" => aggregate).set(len as f64);
}

/// In-memory customer repository.
///
/// Cloning yields another handle to the same storage. Saving a customer whose
/// email belongs to a different customer fails with
/// [`RepositoryError::UniqueViolation`].
#[derive(Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<Vec<Customer>>>,
}

impl InMemoryCustomerRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every customer.
    pub async fn clear(&self) {
        self.customers.write().await.clear();
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, customer_id: CustomerId) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.id() == customer_id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.iter().find(|c| c.email() == email).cloned())
    }

    async fn save(&self, customer: Customer) -> Result<Customer> {
        let mut customers = self.customers.write().await;

        let email_taken = customers
            .iter()
            .any(|c| c.email() == customer.email() && c.id() != customer.id());
        if email_taken {
            return Err(RepositoryError::UniqueViolation {
                field: "email",
                value: customer.email().to_string(),
            });
        }

        tracing::debug!(customer_id = %customer.id(), "Saving customer");
        upsert(&mut customers, customer.clone());
        record_size("customer", customers.len());
        Ok(customer)
    }

    async fn list_all(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.read().await.clone())
    }

    async fn search(&self, query: &CustomerQuery) -> Result<Vec<Customer>> {
        let customers = self.customers.read().await;
        Ok(query.apply(customers.iter()))
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.customers.read().await.len())
    }
}

/// In-memory order repository.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every order.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_id(&self, order_id: OrderId) -> Result<Option<Order>> {
        let orders = self.orders.read().await;
        Ok(orders.iter().find(|o| o.id() == order_id).cloned())
    }

    async fn find_by_customer(&self, customer_id: CustomerId) -> Result<Vec<Order>> {
        let orders = self.orders.read().await;
        Ok(orders
            .iter()
            .filter(|o| o.customer_id() == customer_id)
            .cloned()
            .collect())
    }

    async fn save(&self, order: Order) -> Result<Order> {
        let mut orders = self.orders.write().await;
        tracing::debug!(order_id = %order.id(), status = %order.status(), "Saving order");
        upsert(&mut orders, order.clone());
        record_size("order", orders.len());
        Ok(order)
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        Ok(self.orders.read().await.clone())
    }
}
