//! Core entity, aggregate root, and domain event traits.

use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use common::EventId;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{BusinessRuleViolation, DomainError};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + fmt::Debug + Clone + Send + Sync {
    /// Returns the event type name.
    ///
    /// This is the value of the `event_type` key in the serialized record.
    fn event_type(&self) -> &'static str;

    /// Returns the unique identifier of this event.
    fn event_id(&self) -> EventId;

    /// Returns when the event happened.
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Serializes the event to a flat JSON record.
    fn to_record(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// An object defined by its identity rather than by its attributes.
///
/// Implementors compare and hash by [`Entity::id`] only.
pub trait Entity {
    /// The strongly typed identifier.
    type Id: Copy + Eq + Hash + fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Trait for aggregate roots.
///
/// An aggregate root is the consistency boundary for a cluster of data and the
/// only point of mutation. It queues the domain events raised by its
/// operations until the application layer collects them.
pub trait AggregateRoot: Entity {
    /// The type of events this aggregate raises.
    type Event: DomainEvent;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Returns the events raised since the last collection.
    fn pending_events(&self) -> &[Self::Event];

    #[doc(hidden)]
    fn pending_events_mut(&mut self) -> &mut Vec<Self::Event>;

    /// Appends an event to the pending list.
    fn add_domain_event(&mut self, event: Self::Event) {
        self.pending_events_mut().push(event);
    }

    /// Returns the pending events in emission order and empties the list.
    fn collect_domain_events(&mut self) -> Vec<Self::Event> {
        std::mem::take(self.pending_events_mut())
    }

    /// Discards the pending events without returning them.
    fn clear_domain_events(&mut self) {
        self.pending_events_mut().clear();
    }
}

/// A refused aggregate operation.
///
/// Transitions consume the aggregate; when a guard fails the untouched
/// aggregate is handed back together with the violated rule.
pub struct Rejected<A> {
    aggregate: A,
    violation: BusinessRuleViolation,
}

impl<A> Rejected<A> {
    /// Wraps an aggregate and the rule it failed.
    pub fn new(aggregate: A, violation: BusinessRuleViolation) -> Self {
        Self {
            aggregate,
            violation,
        }
    }

    /// Returns the aggregate as it was before the attempt.
    pub fn aggregate(&self) -> &A {
        &self.aggregate
    }

    /// Returns the violated rule.
    pub fn violation(&self) -> &BusinessRuleViolation {
        &self.violation
    }

    /// Recovers the untouched aggregate.
    pub fn into_aggregate(self) -> A {
        self.aggregate
    }

    /// Splits into the aggregate and the violation.
    pub fn into_parts(self) -> (A, BusinessRuleViolation) {
        (self.aggregate, self.violation)
    }
}

impl<A: Entity> fmt::Debug for Rejected<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("aggregate_id", &self.aggregate.id().to_string())
            .field("violation", &self.violation)
            .finish()
    }
}

impl<A> fmt::Display for Rejected<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.violation, f)
    }
}

impl<A: Entity> std::error::Error for Rejected<A> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.violation)
    }
}

impl<A> From<Rejected<A>> for BusinessRuleViolation {
    fn from(rejected: Rejected<A>) -> Self {
        rejected.violation
    }
}

impl<A> From<Rejected<A>> for DomainError {
    fn from(rejected: Rejected<A>) -> Self {
        DomainError::BusinessRule(rejected.violation)
    }
}
