//! Domain layer for the customer and order service.
//!
//! This crate provides:
//! - Value objects that validate themselves on construction
//! - Entity, AggregateRoot and DomainEvent traits
//! - The Customer aggregate and the Order aggregate with its state machine
//! - Composable specifications for filtering aggregates

pub mod aggregate;
pub mod customer;
pub mod error;
pub mod order;
pub mod specification;
pub mod value_objects;

pub use aggregate::{AggregateRoot, DomainEvent, Entity, Rejected};
pub use customer::{Customer, CustomerEvent, Preferences};
pub use error::{BusinessRuleViolation, DomainError, ValidationError, rules};
pub use order::{Order, OrderDetails, OrderEvent, OrderStatus, OrderTransition};
pub use specification::{BoxedSpecification, Specification};
pub use value_objects::{Address, AddressParts, Email, Money, PhoneNumber};
