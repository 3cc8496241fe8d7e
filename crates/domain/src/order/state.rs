//! Order state machine.

use serde::{Deserialize, Serialize};

use crate::error::{BusinessRuleViolation, rules};

/// Reason recorded when a cancellation does not give one.
pub const DEFAULT_CANCEL_REASON: &str = "Customer request";

/// The state of an order in its lifecycle.
///
/// State transitions:
/// ```text
/// Pending ──► Confirmed ──► Shipped ──► Delivered
///    │            │
///    └────────────┴──► Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order was placed and awaits confirmation.
    #[default]
    Pending,

    /// Order was accepted.
    Confirmed,

    /// Order left the warehouse.
    Shipped,

    /// Order reached the customer (terminal state).
    Delivered,

    /// Order was cancelled (terminal state).
    Cancelled,
}

/// A requested move through the order lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderTransition {
    Confirm,
    Ship,
    Deliver,
    Cancel { reason: String },
}

impl OrderTransition {
    /// Builds a cancellation, falling back to [`DEFAULT_CANCEL_REASON`].
    pub fn cancel(reason: Option<&str>) -> Self {
        OrderTransition::Cancel {
            reason: reason.unwrap_or(DEFAULT_CANCEL_REASON).to_string(),
        }
    }

    /// Returns the operation name.
    pub fn name(&self) -> &'static str {
        match self {
            OrderTransition::Confirm => "confirm",
            OrderTransition::Ship => "ship",
            OrderTransition::Deliver => "deliver",
            OrderTransition::Cancel { .. } => "cancel",
        }
    }
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Returns the status reached by applying `transition`, or the rule that
    /// forbids it from this status.
    pub fn target(&self, transition: &OrderTransition) -> Result<OrderStatus, BusinessRuleViolation> {
        use OrderStatus::*;

        match (self, transition) {
            (Pending, OrderTransition::Confirm) => Ok(Confirmed),
            (Confirmed, OrderTransition::Ship) => Ok(Shipped),
            (Shipped, OrderTransition::Deliver) => Ok(Delivered),
            (Pending | Confirmed, OrderTransition::Cancel { .. }) => Ok(Cancelled),
            (current, OrderTransition::Confirm) => Err(BusinessRuleViolation::new(
                rules::ORDER_CONFIRMATION,
                format!("Only pending orders can be confirmed. Current status: {current}"),
            )),
            (current, OrderTransition::Ship) => Err(BusinessRuleViolation::new(
                rules::ORDER_SHIPPING,
                format!("Only confirmed orders can be shipped. Current status: {current}"),
            )),
            (current, OrderTransition::Deliver) => Err(BusinessRuleViolation::new(
                rules::ORDER_DELIVERY,
                format!("Only shipped orders can be delivered. Current status: {current}"),
            )),
            (current, OrderTransition::Cancel { .. }) => Err(BusinessRuleViolation::new(
                rules::ORDER_CANCELLATION,
                format!("Order in {current} status cannot be cancelled"),
            )),
        }
    }

    /// Returns true if the order can still be cancelled.
    pub fn can_be_cancelled(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }

    /// Returns true if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Returns the status name as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
