//! Customer domain events.

use chrono::{DateTime, Utc};
use common::{CustomerId, EventId};
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

/// Events raised by the customer aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum CustomerEvent {
    /// Customer registered.
    CustomerCreated(CustomerCreatedData),

    /// Customer was deactivated.
    CustomerDeactivated(CustomerDeactivatedData),
}

impl DomainEvent for CustomerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CustomerEvent::CustomerCreated(_) => "CustomerCreated",
            CustomerEvent::CustomerDeactivated(_) => "CustomerDeactivated",
        }
    }

    fn event_id(&self) -> EventId {
        match self {
            CustomerEvent::CustomerCreated(data) => data.event_id,
            CustomerEvent::CustomerDeactivated(data) => data.event_id,
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            CustomerEvent::CustomerCreated(data) => data.occurred_at,
            CustomerEvent::CustomerDeactivated(data) => data.occurred_at,
        }
    }
}

impl CustomerEvent {
    /// Returns the customer the event belongs to.
    pub fn customer_id(&self) -> CustomerId {
        match self {
            CustomerEvent::CustomerCreated(data) => data.customer_id,
            CustomerEvent::CustomerDeactivated(data) => data.customer_id,
        }
    }

    /// Creates a CustomerCreated event.
    pub fn customer_created(
        customer_id: CustomerId,
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
    ) -> Self {
        CustomerEvent::CustomerCreated(CustomerCreatedData {
            event_id: EventId::new(),
            occurred_at: Utc::now(),
            customer_id,
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
        })
    }

    /// Creates a CustomerDeactivated event.
    pub fn customer_deactivated(customer_id: CustomerId, reason: impl Into<String>) -> Self {
        CustomerEvent::CustomerDeactivated(CustomerDeactivatedData {
            event_id: EventId::new(),
            occurred_at: Utc::now(),
            customer_id,
            reason: reason.into(),
        })
    }
}

/// Data for CustomerCreated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreatedData {
    pub event_id: EventId,
    pub occurred_at: DateTime<Utc>,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub customer_email: String,
}

/// Data for CustomerDeactivated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDeactivatedData {
    pub event_id: EventId,
    pub occurred_at: DateTime<Utc>,
    pub customer_id: CustomerId,
    pub reason: String,
}
