//! Integration tests for the order lifecycle.
//!
//! These tests drive the state machine through the public API only.

use std::str::FromStr;

use common::CustomerId;
use domain::{
    AggregateRoot, DomainEvent, Entity, Money, Order, OrderEvent, OrderStatus, OrderTransition,
    rules,
};
use rust_decimal::Decimal;

fn usd(amount: &str) -> Money {
    Money::new(Decimal::from_str(amount).unwrap(), "USD").unwrap()
}

fn new_order() -> Order {
    Order::create(CustomerId::new(), usd("149.90"), None).unwrap()
}

/// Drives a fresh order into `status` and drops the events raised on the way.
fn order_in(status: OrderStatus) -> Order {
    let order = new_order();
    let mut order = match status {
        OrderStatus::Pending => order,
        OrderStatus::Confirmed => order.confirm().unwrap(),
        OrderStatus::Shipped => order.confirm().unwrap().ship().unwrap(),
        OrderStatus::Delivered => order
            .confirm()
            .unwrap()
            .ship()
            .unwrap()
            .deliver()
            .unwrap(),
        OrderStatus::Cancelled => order.cancel(None).unwrap(),
    };
    order.clear_domain_events();
    order
}

fn transitions() -> Vec<OrderTransition> {
    vec![
        OrderTransition::Confirm,
        OrderTransition::Ship,
        OrderTransition::Deliver,
        OrderTransition::cancel(None),
    ]
}

mod happy_path {
    use super::*;

    #[test]
    fn create_confirm_ship_deliver() {
        let mut order = new_order()
            .confirm()
            .unwrap()
            .ship()
            .unwrap()
            .deliver()
            .unwrap();

        assert_eq!(order.status(), OrderStatus::Delivered);
        assert!(order.is_terminal());

        let events = order.collect_domain_events();
        let types: Vec<_> = events.iter().map(|e| e.event_type()).collect();
        assert_eq!(
            types,
            [
                "OrderCreated",
                "OrderStatusChanged",
                "OrderStatusChanged",
                "OrderStatusChanged"
            ]
        );

        let steps: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                OrderEvent::OrderStatusChanged(data) => Some((data.old_status, data.new_status)),
                _ => None,
            })
            .collect();
        assert_eq!(
            steps,
            [
                (OrderStatus::Pending, OrderStatus::Confirmed),
                (OrderStatus::Confirmed, OrderStatus::Shipped),
                (OrderStatus::Shipped, OrderStatus::Delivered),
            ]
        );

        assert!(order.collect_domain_events().is_empty());
    }

    #[test]
    fn events_belong_to_the_order() {
        let mut order = new_order().confirm().unwrap();
        let id = order.id();
        let customer_id = order.customer_id();

        for event in order.collect_domain_events() {
            assert_eq!(event.order_id(), id);
            let record = event.to_record().unwrap();
            assert_eq!(record["customer_id"], customer_id.to_string());
        }
    }

    #[test]
    fn collected_events_are_not_carried_forward() {
        let mut order = new_order();
        assert_eq!(order.collect_domain_events().len(), 1);

        let confirmed = order.confirm().unwrap();
        assert_eq!(confirmed.pending_events().len(), 1);
        assert_eq!(confirmed.pending_events()[0].event_type(), "OrderStatusChanged");
    }
}

mod state_machine {
    use super::*;

    #[test]
    fn every_transition_is_accepted_or_rejected_with_its_rule() {
        for status in OrderStatus::ALL {
            for transition in transitions() {
                let order = order_in(status);
                let id = order.id();
                let name = transition.name();
                let expected = status.target(&transition);

                match (order.transition(transition), expected) {
                    (Ok(next), Ok(target)) => {
                        assert_eq!(next.status(), target, "{status} {name}");
                        assert_eq!(next.pending_events().len(), 1);
                    }
                    (Err(rejected), Err(violation)) => {
                        assert_eq!(rejected.violation(), &violation);
                        let untouched = rejected.into_aggregate();
                        assert_eq!(untouched.id(), id);
                        assert_eq!(untouched.status(), status, "{status} {name}");
                        assert!(untouched.pending_events().is_empty());
                    }
                    (actual, expected) => {
                        panic!("{status} {name}: got {:?}, table says {expected:?}", actual.map(|o| o.status()))
                    }
                }
            }
        }
    }

    #[test]
    fn rule_names_per_operation() {
        let cases = [
            (OrderStatus::Confirmed, OrderTransition::Confirm, rules::ORDER_CONFIRMATION),
            (OrderStatus::Pending, OrderTransition::Ship, rules::ORDER_SHIPPING),
            (OrderStatus::Confirmed, OrderTransition::Deliver, rules::ORDER_DELIVERY),
            (OrderStatus::Delivered, OrderTransition::cancel(None), rules::ORDER_CANCELLATION),
        ];

        for (status, transition, rule) in cases {
            let rejected = order_in(status).transition(transition).unwrap_err();
            assert_eq!(rejected.violation().rule_name(), rule);
        }
    }

    #[test]
    fn cancel_only_from_pending_or_confirmed() {
        for status in OrderStatus::ALL {
            let order = order_in(status);
            assert_eq!(order.can_be_cancelled(), order.cancel(None).is_ok(), "{status}");
        }
    }
}

mod creation {
    use super::*;

    #[test]
    fn zero_total_is_rejected() {
        let err = Order::create(CustomerId::new(), usd("0.00"), None).unwrap_err();
        assert_eq!(err.rule_name(), rules::MINIMUM_ORDER_AMOUNT);
    }

    #[test]
    fn created_event_carries_total() {
        let order = new_order();
        match order.pending_events() {
            [OrderEvent::OrderCreated(data)] => {
                assert_eq!(data.order_id, order.id());
                assert_eq!(data.total_amount, usd("149.90"));
            }
            other => panic!("Expected OrderCreated, got {other:?}"),
        }
    }
}
