//! Order use cases.

use common::OrderId;
use domain::{AggregateRoot, Entity, Money, Order};
use store::{CustomerRepository, OrderRepository};

use crate::commands::{ChangeOrderStatus, CreateOrder, DEFAULT_CURRENCY};
use crate::events;
use crate::{ApplicationError, GetCustomerOrders, Result};

/// Service for placing orders and moving them through their lifecycle.
pub struct OrderService<O: OrderRepository, C: CustomerRepository> {
    orders: O,
    customers: C,
}

impl<O: OrderRepository, C: CustomerRepository> OrderService<O, C> {
    /// Creates a service over the given repositories.
    pub fn new(orders: O, customers: C) -> Self {
        Self { orders, customers }
    }

    /// Places an order for an existing, active customer.
    #[tracing::instrument(skip(self, cmd), fields(customer_id = %cmd.customer_id))]
    pub async fn create_order(&self, cmd: CreateOrder) -> Result<Order> {
        let customer = self
            .customers
            .find_by_id(cmd.customer_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Customer", cmd.customer_id))?;
        if !customer.is_active() {
            return Err(ApplicationError::InactiveCustomer);
        }

        let currency = cmd.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
        let total_amount = Money::new(cmd.total_amount, currency)?;
        let order = Order::create(customer.id(), total_amount, cmd.details)?;

        let order = self.persist(order).await?;
        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.id(), total = %order.total_amount(), "Order created");
        Ok(order)
    }

    /// Loads an order.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_id: OrderId) -> Result<Order> {
        self.orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Order", order_id))
    }

    /// Returns every order.
    pub async fn list_orders(&self) -> Result<Vec<Order>> {
        Ok(self.orders.list_all().await?)
    }

    /// Returns the orders of one customer.
    #[tracing::instrument(skip(self))]
    pub async fn get_customer_orders(&self, query: GetCustomerOrders) -> Result<Vec<Order>> {
        Ok(self.orders.find_by_customer(query.customer_id).await?)
    }

    /// Applies a lifecycle transition to a stored order.
    #[tracing::instrument(skip(self, cmd), fields(order_id = %cmd.order_id, transition = cmd.transition.name()))]
    pub async fn change_status(&self, cmd: ChangeOrderStatus) -> Result<Order> {
        let transition = cmd.transition.name();
        let order = self.get_order(cmd.order_id).await?;
        let previous = order.status();

        let order = order.transition(cmd.transition).inspect_err(|rejected| {
            tracing::warn!(
                status = %rejected.aggregate().status(),
                rule = rejected.violation().rule_name(),
                "Order transition rejected"
            );
        })?;

        let order = self.persist(order).await?;
        metrics::counter!("order_transitions_total", "transition" => transition).increment(1);
        tracing::info!(from = %previous, to = %order.status(), "Order status changed");
        Ok(order)
    }

    /// Drains events, saves, then publishes the drained events.
    async fn persist(&self, mut order: Order) -> Result<Order> {
        let events = order.collect_domain_events();
        let order = self.orders.save(order).await?;
        events::publish(Order::aggregate_type(), order.id(), events);
        Ok(order)
    }
}
