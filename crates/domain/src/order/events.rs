//! Order domain events.

use chrono::{DateTime, Utc};
use common::{CustomerId, EventId, OrderId};
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;
use crate::value_objects::Money;

use super::OrderStatus;

/// Events raised by the order aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum OrderEvent {
    /// Order was placed.
    OrderCreated(OrderCreatedData),

    /// Order moved forward through its lifecycle.
    OrderStatusChanged(OrderStatusChangedData),

    /// Order was cancelled.
    OrderCancelled(OrderCancelledData),
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::OrderCreated(_) => "OrderCreated",
            OrderEvent::OrderStatusChanged(_) => "OrderStatusChanged",
            OrderEvent::OrderCancelled(_) => "OrderCancelled",
        }
    }

    fn event_id(&self) -> EventId {
        match self {
            OrderEvent::OrderCreated(data) => data.event_id,
            OrderEvent::OrderStatusChanged(data) => data.event_id,
            OrderEvent::OrderCancelled(data) => data.event_id,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::OrderCreated(data) => data.occurred_at,
            OrderEvent::OrderStatusChanged(data) => data.occurred_at,
            OrderEvent::OrderCancelled(data) => data.occurred_at,
        }
    }
}

impl OrderEvent {
    /// Returns the order the event belongs to.
    pub fn order_id(&self) -> OrderId {
        match self {
            OrderEvent::OrderCreated(data) => data.order_id,
            OrderEvent::OrderStatusChanged(data) => data.order_id,
            OrderEvent::OrderCancelled(data) => data.order_id,
        }
    }
}

/// Data for OrderCreated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreatedData {
    pub event_id: EventId,
    pub occurred_at: DateTime<Utc>,
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub total_amount: Money,
}

/// Data for OrderStatusChanged event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusChangedData {
    pub event_id: EventId,
    pub occurred_at: DateTime<Utc>,
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub old_status: OrderStatus,
    pub new_status: OrderStatus,
}

/// Data for OrderCancelled event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCancelledData {
    pub event_id: EventId,
    pub occurred_at: DateTime<Utc>,
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    /// Status the order was in before cancellation.
    pub previous_status: OrderStatus,
    pub reason: String,
}

// Convenience constructors for events
impl OrderEvent {
    /// Creates an OrderCreated event.
    pub fn order_created(order_id: OrderId, customer_id: CustomerId, total_amount: Money) -> Self {
        OrderEvent::OrderCreated(OrderCreatedData {
            event_id: EventId::new(),
            occurred_at: Utc::now(),
            order_id,
            customer_id,
            total_amount,
        })
    }

    /// Creates an OrderStatusChanged event.
    pub fn status_changed(
        order_id: OrderId,
        customer_id: CustomerId,
        old_status: OrderStatus,
        new_status: OrderStatus,
    ) -> Self {
        OrderEvent::OrderStatusChanged(OrderStatusChangedData {
            event_id: EventId::new(),
            occurred_at: Utc::now(),
            order_id,
            customer_id,
            old_status,
            new_status,
        })
    }

    /// Creates an OrderCancelled event.
    pub fn order_cancelled(
        order_id: OrderId,
        customer_id: CustomerId,
        previous_status: OrderStatus,
        reason: impl Into<String>,
    ) -> Self {
        OrderEvent::OrderCancelled(OrderCancelledData {
            event_id: EventId::new(),
            occurred_at: Utc::now(),
            order_id,
            customer_id,
            previous_status,
            reason: reason.into(),
        })
    }
}
