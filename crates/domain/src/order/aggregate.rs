//! Order aggregate implementation.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use common::{CustomerId, OrderId};
use serde::Serialize;

use crate::aggregate::{AggregateRoot, Entity, Rejected};
use crate::error::{BusinessRuleViolation, rules};
use crate::value_objects::Money;

use super::{OrderEvent, OrderStatus, OrderTransition};

/// Free-form order attributes (shipping notes, channel, line summaries).
pub type OrderDetails = HashMap<String, serde_json::Value>;

/// Result of an order transition.
pub type TransitionResult = Result<Order, Rejected<Order>>;

/// Order aggregate root.
///
/// Every lifecycle operation consumes the order and returns the next version,
/// carrying the events that have not been collected yet plus the new one.
#[derive(Debug, Clone, Serialize)]
pub struct Order {
    order_id: OrderId,
    customer_id: CustomerId,
    total_amount: Money,
    status: OrderStatus,
    details: OrderDetails,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip)]
    events: Vec<OrderEvent>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.order_id
    }
}

impl AggregateRoot for Order {
    type Event = OrderEvent;

    fn aggregate_type() -> &'static str {
        "Order"
    }

    fn pending_events(&self) -> &[OrderEvent] {
        &self.events
    }

    fn pending_events_mut(&mut self) -> &mut Vec<OrderEvent> {
        &mut self.events
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.order_id == other.order_id
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.order_id.hash(state);
    }
}

// Query methods
impl Order {
    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn total_amount(&self) -> &Money {
        &self.total_amount
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn details(&self) -> &OrderDetails {
        &self.details
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns true if the order can still be cancelled.
    pub fn can_be_cancelled(&self) -> bool {
        self.status.can_be_cancelled()
    }

    /// Returns true if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

// Command methods
impl Order {
    /// Places a new pending order and raises `OrderCreated`.
    ///
    /// The total must be strictly positive.
    pub fn create(
        customer_id: CustomerId,
        total_amount: Money,
        details: Option<OrderDetails>,
    ) -> Result<Self, BusinessRuleViolation> {
        if !total_amount.is_positive() {
            return Err(BusinessRuleViolation::new(
                rules::MINIMUM_ORDER_AMOUNT,
                "Order total amount must be greater than zero",
            ));
        }

        let order_id = OrderId::new();
        let now = Utc::now();
        let mut order = Self {
            order_id,
            customer_id,
            total_amount: total_amount.clone(),
            status: OrderStatus::Pending,
            details: details.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            events: Vec::new(),
        };
        order.add_domain_event(OrderEvent::order_created(
            order_id,
            customer_id,
            total_amount,
        ));
        Ok(order)
    }

    /// Applies a lifecycle transition.
    ///
    /// On success the returned order has the new status and exactly one more
    /// pending event. On failure the order comes back unchanged inside
    /// [`Rejected`].
    pub fn transition(self, transition: OrderTransition) -> TransitionResult {
        let next = match self.status.target(&transition) {
            Ok(next) => next,
            Err(violation) => return Err(Rejected::new(self, violation)),
        };

        let event = match transition {
            OrderTransition::Cancel { reason } => {
                OrderEvent::order_cancelled(self.order_id, self.customer_id, self.status, reason)
            }
            OrderTransition::Confirm | OrderTransition::Ship | OrderTransition::Deliver => {
                OrderEvent::status_changed(self.order_id, self.customer_id, self.status, next)
            }
        };

        let mut order = Self {
            status: next,
            updated_at: Utc::now(),
            ..self
        };
        order.add_domain_event(event);
        Ok(order)
    }

    /// PENDING → CONFIRMED.
    pub fn confirm(self) -> TransitionResult {
        self.transition(OrderTransition::Confirm)
    }

    /// CONFIRMED → SHIPPED.
    pub fn ship(self) -> TransitionResult {
        self.transition(OrderTransition::Ship)
    }

    /// SHIPPED → DELIVERED.
    pub fn deliver(self) -> TransitionResult {
        self.transition(OrderTransition::Deliver)
    }

    /// PENDING or CONFIRMED → CANCELLED. The reason defaults to
    /// `"Customer request"`.
    pub fn cancel(self, reason: Option<&str>) -> TransitionResult {
        self.transition(OrderTransition::cancel(reason))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainEvent;
    use rust_decimal::Decimal;

    fn usd(cents: i64) -> Money {
        Money::new(Decimal::new(cents, 2), "USD").unwrap()
    }

    fn pending() -> Order {
        Order::create(CustomerId::new(), usd(9999), None).unwrap()
    }

    #[test]
    fn test_create_order() {
        let order = pending();
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.total_amount(), &usd(9999));
        assert!(order.details().is_empty());
        assert_eq!(order.pending_events().len(), 1);
        assert_eq!(order.pending_events()[0].event_type(), "OrderCreated");
    }

    #[test]
    fn test_create_with_zero_total_fails() {
        let err = Order::create(CustomerId::new(), usd(0), None).unwrap_err();
        assert_eq!(err.rule_name(), "MinimumOrderAmount");
        assert_eq!(err.message(), "Order total amount must be greater than zero");
    }

    #[test]
    fn test_create_keeps_details() {
        let mut details = OrderDetails::new();
        details.insert("channel".to_string(), serde_json::json!("web"));
        let order = Order::create(CustomerId::new(), usd(100), Some(details)).unwrap();
        assert_eq!(order.details()["channel"], "web");
    }

    #[test]
    fn test_confirm_preserves_identity_and_carries_events() {
        let order = pending();
        let id = order.id();
        let created_at = order.created_at();

        let confirmed = order.confirm().unwrap();
        assert_eq!(confirmed.id(), id);
        assert_eq!(confirmed.created_at(), created_at);
        assert_eq!(confirmed.status(), OrderStatus::Confirmed);
        assert!(confirmed.updated_at() >= created_at);

        let types: Vec<_> = confirmed
            .pending_events()
            .iter()
            .map(|e| e.event_type())
            .collect();
        assert_eq!(types, ["OrderCreated", "OrderStatusChanged"]);
    }

    #[test]
    fn test_rejected_transition_returns_untouched_order() {
        let order = pending();
        let id = order.id();

        let rejected = order.ship().unwrap_err();
        assert_eq!(rejected.violation().rule_name(), "OrderShippingRule");

        let order = rejected.into_aggregate();
        assert_eq!(order.id(), id);
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.pending_events().len(), 1);
    }

    #[test]
    fn test_cancel_records_previous_status_and_reason() {
        let mut cancelled = pending()
            .confirm()
            .unwrap()
            .cancel(Some("Found a better price"))
            .unwrap();
        assert_eq!(cancelled.status(), OrderStatus::Cancelled);
        assert!(!cancelled.can_be_cancelled());

        let events = cancelled.collect_domain_events();
        match events.last() {
            Some(OrderEvent::OrderCancelled(data)) => {
                assert_eq!(data.previous_status, OrderStatus::Confirmed);
                assert_eq!(data.reason, "Found a better price");
            }
            other => panic!("Expected OrderCancelled, got {other:?}"),
        }
    }

    #[test]
    fn test_cancel_default_reason() {
        let mut cancelled = pending().cancel(None).unwrap();
        let events = cancelled.collect_domain_events();
        match events.last() {
            Some(OrderEvent::OrderCancelled(data)) => assert_eq!(data.reason, "Customer request"),
            other => panic!("Expected OrderCancelled, got {other:?}"),
        }
    }

    #[test]
    fn test_equality_by_identity() {
        let order = pending();
        let copy = order.clone().confirm().unwrap();
        assert_eq!(order, copy);
        assert_ne!(order, pending());

        let set: std::collections::HashSet<_> = [order, copy].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serialization_skips_events() {
        let order = pending();
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["status"], "PENDING");
        assert_eq!(value["total_amount"]["amount"], "99.99");
        assert!(value.get("events").is_none());
    }
}
